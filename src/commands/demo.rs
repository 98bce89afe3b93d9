use crate::core::math::render_demo;

pub fn main() -> anyhow::Result<()> {
    println!();
    println!("{}", render_demo());
    Ok(())
}
