use clap::Parser;

use test_image_gen::ImageGenerator;

#[derive(Parser)]
#[command(name = "test-image-gen")]
#[command(version)]
#[command(about = "Write a 300x300 solid blue test-image.png to the current directory")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _args = Cli::parse();

    ImageGenerator::new().run()
}
