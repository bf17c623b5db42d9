// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry lookups (RegOpenKeyExW and friends) used by font enumeration.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
