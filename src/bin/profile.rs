use mazegen::app::App;

fn main() -> mazegen::Result<()> {
    let app = App::default();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok());
    app.profile(&mut std::io::stdout(), u8::MAX as u16, u8::MAX as u16, num_iters)?;
    Ok(())
}
