fn main() {
    if let Err(err) = flowcanvas::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
