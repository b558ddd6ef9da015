//!
//! Named groups of bones with display colors.

use {
    ahash::AHashMap,
    palette::Srgba,
    std::sync::atomic::{AtomicBool, Ordering},
};

/// Name of the fallback category.
pub const DEFAULT_CATEGORY: &str = "other";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Category '{name}' is already registered")]
    DuplicateCategory { name: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(usize);

#[derive(Debug)]
pub struct Category {
    id: CategoryId,
    name: String,
    default_color: Srgba,
    should_display: AtomicBool,
    bones: Box<[String]>,
}

impl Category {
    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_color(&self) -> Srgba {
        self.default_color
    }

    /// Whether any bone of this category was seen so far.
    pub fn should_display(&self) -> bool {
        self.should_display.load(Ordering::Relaxed)
    }

    /// Bones this category claims, including ones lost to earlier categories.
    pub fn bones(&self) -> &[String] {
        &self.bones
    }

    /// Returns `true` on the first call only.
    fn mark_for_display(&self) -> bool {
        !self.should_display.swap(true, Ordering::Relaxed)
    }
}

/// Bone name claimed by more than one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    pub bone: String,
    pub owner: CategoryId,
    pub rejected: CategoryId,
}

/// Maps bone names to categories.
///
/// Built once at startup, then shared by reference.
/// Only the per-category display flag changes afterwards.
#[derive(Debug)]
pub struct Registry {
    categories: Vec<Category>,
    by_name: AHashMap<String, CategoryId>,
    by_bone: AHashMap<String, CategoryId>,
    collisions: Vec<Collision>,
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

impl Registry {
    /// Registry with only the fallback category.
    pub fn new() -> Self {
        let default = Category {
            id: CategoryId(0),
            name: DEFAULT_CATEGORY.to_owned(),
            default_color: Srgba::new(1.0, 1.0, 1.0, 0.5647059),
            should_display: AtomicBool::new(false),
            bones: Box::new([]),
        };

        let mut by_name = AHashMap::new();
        by_name.insert(default.name.clone(), default.id);

        Registry {
            categories: vec![default],
            by_name,
            by_bone: AHashMap::new(),
            collisions: Vec::new(),
        }
    }

    /// Registers a new category.
    ///
    /// Bones already owned by another category stay with that category.
    pub fn register<I, S>(
        &mut self,
        name: &str,
        default_color: Srgba,
        bones: I,
    ) -> Result<&Category, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.by_name.contains_key(name) {
            return Err(RegistryError::DuplicateCategory {
                name: name.to_owned(),
            });
        }

        let id = CategoryId(self.categories.len());
        let bones: Box<[String]> = bones.into_iter().map(Into::into).collect();

        for bone in bones.iter() {
            match self.by_bone.get(bone) {
                Some(&owner) if owner != id => {
                    tracing::warn!(
                        "Bone '{}' is already in category '{}', '{}' does not get it",
                        bone,
                        self.categories[owner.0].name,
                        name,
                    );
                    self.collisions.push(Collision {
                        bone: bone.clone(),
                        owner,
                        rejected: id,
                    });
                }
                Some(_) => {}
                None => {
                    self.by_bone.insert(bone.clone(), id);
                }
            }
        }

        self.by_name.insert(name.to_owned(), id);
        self.categories.push(Category {
            id,
            name: name.to_owned(),
            default_color,
            should_display: AtomicBool::new(false),
            bones,
        });

        Ok(&self.categories[id.0])
    }

    pub fn default_category(&self) -> &Category {
        &self.categories[0]
    }

    /// Finds category of the bone.
    ///
    /// Unknown, empty and missing names fall back to the default category.
    /// A category found by bone name becomes displayable.
    pub fn resolve(&self, bone: Option<&str>) -> &Category {
        let id = match bone.filter(|bone| !bone.is_empty()) {
            Some(bone) => match self.by_bone.get(bone) {
                Some(&id) => id,
                None => return self.default_category(),
            },
            None => return self.default_category(),
        };

        let category = &self.categories[id.0];
        if category.mark_for_display() {
            tracing::debug!("Category '{}' is now displayed", category.name);
        }
        category
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.by_name.get(name).map(|id| &self.categories[id.0])
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id.0)
    }

    /// Categories in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> + '_ {
        self.categories.iter()
    }

    /// Categories that had at least one bone resolved.
    pub fn displayed(&self) -> impl Iterator<Item = &Category> + '_ {
        self.categories.iter().filter(|c| c.should_display())
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
