/**
 * Loading and saving of scenes as Wavefront OBJ files with vertex colors.
 */
pub mod mesh;
pub mod obj;
