use shared_datastore::ReferenceStore;
use shared_models::Provider;

/// Read-only catalog queries over the provider reference data.
pub struct CatalogService<'a> {
    reference: &'a ReferenceStore,
}

impl<'a> CatalogService<'a> {
    pub fn new(reference: &'a ReferenceStore) -> Self {
        Self { reference }
    }

    pub fn list(&self) -> &[Provider] {
        self.reference.providers()
    }

    pub fn get(&self, provider_id: &str) -> Option<&Provider> {
        self.reference.provider(provider_id)
    }
}
