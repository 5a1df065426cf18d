//! Shared datasets and projections for integration tests

use std::sync::Arc;

use implore_scatter::{
    DataPoint, Dataset, MetadataValue, Projection, ProjectionComponents, ProjectionType,
    SpriteMetadata,
};

/// Five words on a plane, linked into one trajectory 0 -> 1 -> 2
///
/// Points 3 and 4 belong to no sequence.
pub fn five_words() -> Dataset {
    let words = ["alpha", "beta", "gamma", "delta", "epsilon"];
    let coords = [
        (0.0, 0.0, 1.0),
        (1.0, 2.0, 2.0),
        (2.0, 4.0, 3.0),
        (3.0, 1.0, 4.0),
        (4.0, 3.0, 5.0),
    ];
    let points = words
        .iter()
        .zip(coords.iter())
        .enumerate()
        .map(|(i, (word, &(x, y, z)))| {
            let mut point = DataPoint::new(i)
                .with_projection("pca-0", x)
                .with_projection("pca-1", y)
                .with_projection("pca-2", z)
                .with_metadata("word", *word);
            if i < 2 {
                point = point.with_metadata("__next__", MetadataValue::Number((i + 1) as f64));
            }
            point
        })
        .collect();

    let mut dataset = Dataset::new(points);
    dataset.compute_sequences();
    dataset
}

/// `five_words` with a sprite atlas attached
#[allow(dead_code)]
pub fn five_sprites() -> Dataset {
    let mut dataset = five_words();
    dataset.sprite_metadata = Some(SpriteMetadata {
        image_path: "spritesheet.png".to_string(),
        single_image_dim: [28, 28],
    });
    dataset
}

/// 2D PCA projection
pub fn planar(dataset: Dataset) -> Projection {
    Projection::new(
        ProjectionType::Pca,
        ProjectionComponents::planar("pca-0", "pca-1"),
        Arc::new(dataset),
    )
}

/// 3D PCA projection
#[allow(dead_code)]
pub fn spatial(dataset: Dataset) -> Projection {
    Projection::new(
        ProjectionType::Pca,
        ProjectionComponents::spatial("pca-0", "pca-1", "pca-2"),
        Arc::new(dataset),
    )
}
