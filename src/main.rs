use account_console::bank::{Console, Registry};
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    let reader = BufReader::new(tokio::io::stdin());
    let mut console = Console::new(Registry::new(), reader);

    if let Err(err) = console.run().await {
        eprintln!("Error reading input: {err}");
        std::process::exit(1);
    }
}
