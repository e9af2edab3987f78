//! visualgen: generate Visual Studio project files from a directory tree

use anyhow::Result;

fn main() -> Result<()> {
    visualgen::cli::run()
}
