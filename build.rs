//! Build script to generate build-time information

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Surfaced by the /health endpoint
    EmitBuilder::builder()
        .build_date()
        .git_sha(true)
        .rustc_semver()
        .emit()?;

    Ok(())
}
