fn main() {
    if let Err(err) = mermaid_sanitizer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
