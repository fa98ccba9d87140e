fn main() {
    match freespace::run() {
        Ok(Some(_)) => {}
        Ok(None) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    }
}
