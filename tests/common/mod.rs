#![allow(dead_code)]


/// Scratch repositories live next to the crate instead of in the system temp dir
const SCRATCH_DIR: &str = "../playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", SCRATCH_DIR);
    }

    std::fs::create_dir_all(SCRATCH_DIR)
        .unwrap_or_else(|err| panic!("Failed to create {}: {}", SCRATCH_DIR, err));
}
