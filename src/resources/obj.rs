use std::{
    fs::File,
    io::{BufRead, BufWriter, Cursor, Write},
    path::Path,
};

use anyhow::Context;

use crate::{context::MemoryScene, data_structures::mesh::PaintableMesh};

use super::mesh;

fn load_options() -> tobj::LoadOptions {
    // Index by position only so each color stays attached to its vertex.
    tobj::LoadOptions {
        single_index: false,
        triangulate: false,
        ..Default::default()
    }
}

/**
 * Loads an OBJ file. Material libraries are resolved next to the file.
 *
 * Vertices no face or line uses are dropped by the loader; their
 * number is logged as a warning (see [`unreferenced_vertices`]).
 */
pub fn load_scene(file_name: impl AsRef<Path>) -> anyhow::Result<MemoryScene> {
    let path = file_name.as_ref();
    let obj_text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read OBJ file {}", path.display()))?;
    let base = path.parent().unwrap_or(Path::new(""));
    let scene = parse_scene(&obj_text, |mtl| tobj::load_mtl(base.join(mtl)))
        .with_context(|| format!("failed to load OBJ file {}", path.display()))?;
    log::info!("loaded {} mesh(es) from {}", scene.len(), path.display());
    Ok(scene)
}

/// Loads OBJ text from `reader`. Material libraries are not resolved.
pub fn load_scene_from_reader<R: BufRead>(reader: &mut R) -> anyhow::Result<MemoryScene> {
    let mut obj_text = String::new();
    reader
        .read_to_string(&mut obj_text)
        .context("failed to read OBJ data")?;
    parse_scene(&obj_text, |_| Err(tobj::LoadError::OpenFileFailed))
        .context("failed to parse OBJ data")
}

fn parse_scene<F>(obj_text: &str, material_loader: F) -> Result<MemoryScene, tobj::LoadError>
where
    F: Fn(&Path) -> tobj::MTLLoadResult,
{
    let mut reader = Cursor::new(obj_text);
    let (models, _materials) = tobj::load_obj_buf(&mut reader, &load_options(), material_loader)?;

    let dropped = unreferenced_vertices(obj_text);
    if dropped > 0 {
        log::warn!("{dropped} vertices are not used by any element and were not loaded");
    }
    Ok(mesh::load_meshes(&models).into_iter().collect())
}

/**
 * Counts the `v` lines of `obj_text` that no face (`f`) or line (`l`) refers
 * to, either by absolute or by relative index.
 *
 * Such vertices belong to no object and do not survive a load. Point
 * elements (`p`) are not loaded, so vertices only they use count too.
 */
pub fn unreferenced_vertices(obj_text: &str) -> usize {
    let mut used: Vec<bool> = Vec::new();
    for line in obj_text.lines() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => used.push(false),
            Some("f" | "l") => {
                let declared = used.len() as i64;
                for token in tokens {
                    let Some(Ok(index)) = token.split('/').next().map(str::parse::<i64>) else {
                        continue;
                    };
                    // 1-based, or negative counting back from the latest vertex.
                    let index = if index < 0 { declared + index } else { index - 1 };
                    if let Some(slot) = usize::try_from(index).ok().and_then(|i| used.get_mut(i)) {
                        *slot = true;
                    }
                }
            }
            _ => {}
        }
    }
    used.iter().filter(|&&u| !u).count()
}

pub fn save_scene(scene: &MemoryScene, file_name: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = file_name.as_ref();
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_scene(scene, &mut out)?;
    out.flush()?;
    log::info!("wrote {} mesh(es) to {}", scene.len(), path.display());
    Ok(())
}

/**
 * Writes every mesh as an OBJ object with `v x y z r g b` vertex lines.
 *
 * OBJ has no alpha channel; alpha is dropped. A mesh vertex that no face
 * uses is still written, but will not be loaded back.
 */
pub fn write_scene<W: Write>(scene: &MemoryScene, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "# vertex-color-bench")?;
    // OBJ indices are 1-based and global across objects.
    let mut offset = 1u32;
    for mesh in scene.meshes() {
        writeln!(out, "o {}", mesh.name)?;
        for v in &mesh.vertices {
            let [x, y, z] = v.position;
            let c = v.color;
            writeln!(out, "v {x} {y} {z} {} {} {}", c.r, c.g, c.b)?;
        }
        for face in mesh.faces() {
            write!(out, "f")?;
            for index in face {
                write!(out, " {}", index + offset)?;
            }
            writeln!(out)?;
        }
        offset += mesh.vertex_count() as u32;
    }
    Ok(())
}
