pub use assets::AssetDir;

mod assets;
