pub mod generator;

pub use generator::{
    ImageGenerator, FILL_COLOR, HEIGHT, OUTPUT_PATH, SUCCESS_MESSAGE, WIDTH,
};
