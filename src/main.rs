use kotime::commands::Cli;

fn main() -> anyhow::Result<()> {
    Cli::menu()
}
