use miette::Result;

/// Main entry point for the stackscout CLI
fn main() -> Result<()> {
    miette::set_panic_hook();

    stackscout::run()
}
