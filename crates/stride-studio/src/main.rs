use anyhow::{Context, Result};
use stride_engine::backend::{VertexLayout, VertexLayoutInit};
use stride_engine::coords::{Color, Vec2};
use stride_engine::logging::{init_logging, LoggingConfig};
use stride_engine::{RecordBuffer, RecordSchema};

const QUAD_CORNERS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          STRIDE PACKING STUDIO         ║");
    println!("  ║   interleaved records  ·  wgpu layout  ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    // position, uv, color
    let mut schema = RecordSchema::new();
    schema
        .attribute_of::<Vec2>()
        .attribute_of::<[f32; 2]>()
        .attribute_of::<Color>();

    let mut buffer = RecordBuffer::new(QUAD_CORNERS.len());
    buffer.apply_schema(&schema).context("applying quad schema")?;

    let positions: Vec<Vec2> = QUAD_CORNERS
        .iter()
        .map(|c| Vec2::new(c.x * 320.0 + 40.0, c.y * 180.0 + 40.0))
        .collect();
    let uvs: Vec<[f32; 2]> = QUAD_CORNERS.iter().map(|c| [c.x, c.y]).collect();
    let colors = [
        Color::from_u8(0xE0, 0x4F, 0x5F, 0xFF),
        Color::from_u8(0x4F, 0xA3, 0xE0, 0xFF),
        Color::from_u8(0x5F, 0xE0, 0x7A, 0xFF),
        Color::from_u8(0xE0, 0xC8, 0x4F, 0x80),
    ];

    buffer.load_field(0, &positions).context("loading positions")?;
    buffer.load_field(1, &uvs).context("loading uvs")?;
    buffer.load_field(2, &colors).context("loading colors")?;

    // Append a second quad's worth of records; only positions get filled, the
    // rest stays zeroed.
    buffer.grow_record_count(QUAD_CORNERS.len()).context("growing buffer")?;
    let shifted: Vec<Vec2> = positions
        .iter()
        .map(|p| Vec2::new(p.x + 400.0, p.y))
        .collect();
    let mut all_positions = positions.clone();
    all_positions.extend(shifted);
    buffer.load_field(0, &all_positions).context("loading shifted positions")?;

    if let Err(err) = buffer.load_field(2, &uvs) {
        log::warn!("expected rejection: {err}");
    }

    let vertex_layout = VertexLayout::for_buffer(&buffer, VertexLayoutInit::default())
        .context("describing buffer for wgpu")?;
    let snapshot = buffer.externalize().context("externalizing buffer")?;
    let init = VertexLayout::buffer_init(Some("stride studio quads"), &snapshot);

    println!("  records    {}", buffer.record_count());
    println!("  stride     {} bytes", buffer.stride());
    println!("  storage    {} bytes", init.contents.len());
    println!();
    for (i, attr) in vertex_layout.attributes().iter().enumerate() {
        println!(
            "  field {i}    @{:<3} offset {:<3} {:?}  ({})",
            attr.shader_location,
            attr.offset,
            attr.format,
            buffer.schema()[i],
        );
    }
    println!();

    for record in 0..buffer.record_count() {
        let bytes = buffer.record_bytes(record)?;
        let hex: Vec<String> = bytes.iter().take(8).map(|b| format!("{b:02x}")).collect();
        log::info!("record {record}: {} ..", hex.join(" "));
    }

    let described = vertex_layout.as_buffer_layout();
    log::info!(
        "vertex buffer layout: stride {}, {} attributes, {:?}",
        described.array_stride,
        described.attributes.len(),
        described.step_mode
    );
    Ok(())
}
