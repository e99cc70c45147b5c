use skilib::cli_options::{Options, USAGE};
use skilib::work;

fn main() {
    let args = std::env::args().skip(1);
    let options = match Options::new(args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{}\n\n{}", err, USAGE);
            std::process::exit(2);
        }
    };
    match work(&options) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
