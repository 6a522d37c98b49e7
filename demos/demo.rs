use identicon::{Icon, IconError, Rgb};

fn main() -> Result<(), IconError> {
    // Default settings: 5x5 blocks on 250x250 pixels, white background
    let simple = Icon::new("Simple")?;
    let path = simple.save_png()?;
    println!("saved {}", path.display());
    println!("{}", simple.pattern());

    print!("\n--------------\n\n");

    let custom = Icon::builder("Custom")
        .foreground(Rgb::new(122, 16, 21))
        .complementary_background()
        .size(7)
        .pixels(300)
        .build()?;
    let path = custom.save_jpeg()?;
    println!("saved {}", path.display());
    print!("{}", custom);
    Ok(())
}
