fn main() -> anyhow::Result<()> {
    filemorph::cli::run_cli()
}
