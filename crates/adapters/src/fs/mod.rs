mod artwork;

pub use artwork::ImageCrateArtworkLoader;
