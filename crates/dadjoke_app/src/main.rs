mod platform;

fn main() -> anyhow::Result<()> {
    let address = std::env::args().nth(1);
    platform::run_app(address)
}
