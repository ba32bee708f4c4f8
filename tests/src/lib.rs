mod collection;
mod utils;
