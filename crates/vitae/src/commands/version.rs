pub fn run() -> anyhow::Result<()> {
    println!("vitae {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
