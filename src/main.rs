use anyhow::Context;
use png_icon::{encode_solid_image, write_file, ColourType};

const ICON_SIZE: u32 = 128;
const ICON_COLOUR: [u8; 3] = [0x00, 0xFF, 0x00];
const OUTPUT_PATH: &str = "icon.png";

fn main() -> anyhow::Result<()> {
    let bytes = encode_solid_image(ICON_SIZE, ICON_SIZE, 8, ColourType::RGB, ICON_COLOUR)
        .context("encoding icon")?;
    write_file(OUTPUT_PATH, &bytes).with_context(|| format!("saving {}", OUTPUT_PATH))?;

    println!("{} created successfully", OUTPUT_PATH);
    Ok(())
}
