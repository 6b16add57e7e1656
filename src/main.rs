fn main() {
    if let Err(err) = schema_designer_graph::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
