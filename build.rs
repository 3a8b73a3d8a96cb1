//! Build script for sgr
//!
//! Dev builds get `VERGEN_GIT_SHA`, which `cli::VERSION` appends to the
//! package version. With the `release` feature the script does nothing and
//! `--version` prints the bare package version.

fn main() {
    #[cfg(not(feature = "release"))]
    {
        use vergen_gitcl::{Emitter, GitclBuilder};

        let git = GitclBuilder::default()
            .sha(true)
            .build()
            .expect("Failed to configure git info");

        if let Err(e) = Emitter::default()
            .add_instructions(&git)
            .expect("Failed to add git instructions")
            .emit()
        {
            // Building from a tarball without .git still needs the variable
            eprintln!("cargo:warning=Failed to get git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        }
    }
}
