use std::ops::Index;

use serde::Serialize;

use crate::{DomainError, Flower};

const BUILTIN_FLOWERS: [(&str, &str, &str); 3] = [
    (
        "kembangsepatu.jpg",
        "Kembang Sepatu",
        "Kembang sepatu, atau hibiscus, berasal dari keluarga Malvaceae dan memiliki beragam jenis. \
Bunganya yang besar dan berwarna cerah membuatnya populer sebagai tanaman hias. \
Selain itu, beberapa varietas juga memiliki nilai pengobatan dalam tradisi herbal.\n",
    ),
    (
        "mawar.jpg",
        "Mawar",
        "Mawar, dengan keindahan dan keharumannya, sering dianggap sebagai simbol cinta dan romantika. \
Bunga ini berasal dari genus Rosa dan hadir dalam berbagai warna seperti merah, putih, kuning, dan merah muda. \
Selain nilai dekoratif, minyak mawar juga digunakan dalam industri parfum dan kosmetik.\n",
    ),
    (
        "tulip.jpg",
        "Tulip",
        "Tulip, bunga asli Eropa, terkenal dengan keanggunannya dan sering kali dikaitkan dengan Belanda. \
Tulip hadir dalam berbagai warna dan varietas, memberikan keindahan luar biasa pada taman. \
Bunga ini memiliki sejarah panjang sebagai simbol kekayaan dan kemewahan.\n",
    ),
];

/// Ordered, non-empty list of flowers. Read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlowerCatalog {
    flowers: Vec<Flower>,
}

impl FlowerCatalog {
    pub fn new(flowers: Vec<Flower>) -> Result<Self, DomainError> {
        if flowers.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }
        Ok(Self { flowers })
    }

    /// The three flowers the application ships with.
    pub fn builtin() -> Self {
        let flowers = BUILTIN_FLOWERS
            .into_iter()
            .map(|(image_ref, title, description)| {
                Flower::from_static(image_ref, title, description)
            })
            .collect();
        Self { flowers }
    }

    pub fn get(&self, index: usize) -> Result<&Flower, DomainError> {
        self.flowers.get(index).ok_or(DomainError::OutOfRange {
            index,
            size: self.flowers.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    /// Never true for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flower> {
        self.flowers.iter()
    }
}

impl Index<usize> for FlowerCatalog {
    type Output = Flower;

    fn index(&self, index: usize) -> &Self::Output {
        &self.flowers[index]
    }
}
