//! Paints a black-to-white gradient over every mesh of an OBJ file.
//!
//! Usage: `obj-paint <input.obj> <output.obj> [x|y|z]`

use anyhow::{Context, bail};
use vertex_color_bench::{
    Axis, Color, GradientBounds, PaintError, PaintSettings, SelectionItem, apply,
    logging::{LoggingConfig, init_logging},
    resources::obj::{load_scene, save_scene},
};

fn parse_axis(arg: Option<&str>) -> anyhow::Result<Axis> {
    match arg.map(str::to_ascii_lowercase).as_deref() {
        None | Some("y") => Ok(Axis::Y),
        Some("x") => Ok(Axis::X),
        Some("z") => Ok(Axis::Z),
        Some(other) => bail!("unknown axis `{other}`, expected x, y or z"),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (Some(input), Some(output)) = (args.first(), args.get(1)) else {
        bail!("usage: obj-paint <input.obj> <output.obj> [x|y|z]");
    };
    let axis = parse_axis(args.get(2).map(String::as_str))?;

    let mut scene = load_scene(input)?;
    let settings =
        PaintSettings::gradient(Color::black(), Color::white(), GradientBounds::MeshBounds, axis);

    let ids: Vec<_> = scene.mesh_ids().collect();
    for id in ids {
        match apply(&mut scene, &[SelectionItem::Mesh(id)], &settings) {
            Ok(report) => log::info!("{id}: {} vertices painted", report.painted),
            // Flat meshes have no extent along the axis; leave them as they are.
            Err(PaintError::DegenerateBounds) => log::warn!("{id}: flat along {axis:?}, skipped"),
            Err(e) => return Err(e).with_context(|| format!("painting {id}")),
        }
    }

    save_scene(&scene, output)
}
