fn main() {
    // Errors are reported but never turn into a nonzero exit.
    if let Err(e) = jucer2cmake_rust::run() {
        eprintln!("Error: {e:#}");
    }
}
