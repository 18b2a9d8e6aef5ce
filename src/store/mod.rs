use crate::models::TechAsset;

/// Owns the asset collection. Handlers never touch the `Vec` directly —
/// `list` and `update_status` are the whole storage interface, so a real
/// backing store could replace this struct without changing handler code.
///
/// Mutation safety comes from the `RwLock` the state wraps around the store;
/// the struct itself is plain data.
#[derive(Debug, Default)]
pub struct AssetStore {
    assets: Vec<TechAsset>,
}

impl AssetStore {
    pub fn new(assets: Vec<TechAsset>) -> Self {
        Self { assets }
    }

    /// All assets in storage order, or the subsequence whose status equals
    /// `status` exactly (case-sensitive, no normalization). A status no asset
    /// has yields an empty vec, not an error.
    pub fn list(&self, status: Option<&str>) -> Vec<TechAsset> {
        match status {
            None => self.assets.clone(),
            Some(wanted) => self
                .assets
                .iter()
                .filter(|a| a.status == wanted)
                .cloned()
                .collect(),
        }
    }

    /// Overwrite the status of the first asset (in storage order) whose
    /// invnumber matches, returning a copy of the updated record. `None` when
    /// no asset matches; nothing is mutated in that case. Any status string
    /// is accepted.
    pub fn update_status(&mut self, invnumber: i64, status: &str) -> Option<TechAsset> {
        let asset = self.assets.iter_mut().find(|a| a.invnumber == invnumber)?;
        asset.status = status.to_string();
        Some(asset.clone())
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
