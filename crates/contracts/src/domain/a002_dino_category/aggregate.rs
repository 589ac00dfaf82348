use serde::Serialize;

/// Named group of example species inside a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DinoSubCategory {
    pub name: &'static str,
    pub examples: &'static [&'static str],
}

/// A taxonomic group with its teaser copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DinoCategory {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub sub_categories: &'static [DinoSubCategory],
}

impl DinoCategory {
    /// First `limit` examples of the first sub-category.
    pub fn notable_species(&self, limit: usize) -> &'static [&'static str] {
        self.sub_categories
            .first()
            .map(|sub| &sub.examples[..sub.examples.len().min(limit)])
            .unwrap_or(&[])
    }

    /// Filter chip id on the Dinopedia page.
    pub fn filter_id(&self) -> String {
        self.title.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::super::data::DINO_CATEGORIES;
    use super::*;

    #[test]
    fn test_ids_unique_and_ordered() {
        let ids: Vec<_> = DINO_CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_notable_species_limit() {
        let theropods = &DINO_CATEGORIES[0];
        assert_eq!(
            theropods.notable_species(4),
            &["Tyrannosaurus Rex", "Albertosaurus", "Velociraptor", "Deinonychus"]
        );
        let sauropods = &DINO_CATEGORIES[1];
        assert_eq!(sauropods.notable_species(4).len(), 3);
    }

    #[test]
    fn test_without_sub_categories() {
        let bare = DinoCategory {
            id: 99,
            title: "Bare",
            description: "",
            image: "",
            sub_categories: &[],
        };
        assert!(bare.notable_species(4).is_empty());
        assert_eq!(bare.filter_id(), "bare");
    }
}
