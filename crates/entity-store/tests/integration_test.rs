use entity_store::{
    EnrichingController, Enrichable, EntityStore, Lookup, Repository, StoreEntity, StoreError,
};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
struct Shelf {
    id: u32,
    label: String,
}

impl StoreEntity for Shelf {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }

    fn apply_update(&mut self, update: Shelf) {
        self.label = update.label;
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Bin {
    id: u32,
    slot: u32,
    shelf_id: u32,
}

#[derive(Debug, PartialEq)]
struct BinLocation {
    id: u32,
    slot: u32,
    shelf: Shelf,
}

impl StoreEntity for Bin {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }

    fn apply_update(&mut self, update: Bin) {
        self.slot = update.slot;
        self.shelf_id = update.shelf_id;
    }
}

impl Enrichable for Bin {
    type ParentId = u32;
    type Parent = Shelf;
    type View = BinLocation;

    fn parent_id(&self) -> u32 {
        self.shelf_id
    }

    fn enrich(self, shelf: Shelf) -> BinLocation {
        BinLocation {
            id: self.id,
            slot: self.slot,
            shelf,
        }
    }
}

/// Shelves are served straight from their store.
struct ShelfLookup(Arc<EntityStore<Shelf>>);

#[async_trait::async_trait]
impl Lookup<u32, Shelf> for ShelfLookup {
    async fn get(&self, id: u32) -> Result<Shelf, StoreError> {
        self.0.get(id).await
    }
}

fn shelf(label: &str) -> Shelf {
    Shelf {
        id: 0,
        label: label.to_string(),
    }
}

#[tokio::test]
async fn test_store_crud_lifecycle() {
    let store = EntityStore::<Shelf>::new();

    let created = store.create(shelf("A")).await.expect("Failed to create");
    assert_eq!(created.id, 1);
    assert_eq!(store.get(1).await.unwrap(), created);

    store
        .update(1, shelf("A-renamed"))
        .await
        .expect("Failed to update");
    assert_eq!(store.get(1).await.unwrap().label, "A-renamed");

    let removed = store.delete(1).await.expect("Failed to delete");
    assert_eq!(removed.label, "A-renamed");

    assert!(store.get(1).await.unwrap_err().is_not_found());
    assert!(matches!(
        store.delete(1).await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        store.get_all().await,
        Err(StoreError::Empty { .. })
    ));
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_sequential_ids() {
    let store = Arc::new(EntityStore::<Shelf>::new());
    let mut handles = Vec::new();

    for i in 0..50 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.create(shelf(&format!("shelf-{i}"))).await.unwrap().id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    let expected: HashSet<u32> = (1..=50).collect();
    assert_eq!(ids, expected);
    assert_eq!(store.len().await, 50);
}

#[tokio::test]
async fn test_readers_and_writers_interleave_safely() {
    let store = Arc::new(EntityStore::<Shelf>::new());
    store.create(shelf("seed")).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..20 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                store.create(shelf("w")).await.map(|_| ())
            } else {
                store.get_all().await.map(|all| assert!(!all.is_empty()))
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(store.get_all().await.unwrap().len(), 11);
}

#[tokio::test]
async fn test_enrichment_over_real_stores() {
    let shelves = Arc::new(EntityStore::<Shelf>::new());
    let bins = Arc::new(EntityStore::<Bin>::new());
    let controller =
        EnrichingController::new(bins.clone(), Arc::new(ShelfLookup(shelves.clone())));

    let a = shelves.create(shelf("A")).await.unwrap();
    let b = shelves.create(shelf("B")).await.unwrap();

    for (slot, shelf_id) in [(1, a.id), (2, b.id), (3, a.id)] {
        controller
            .create(Bin {
                id: 0,
                slot,
                shelf_id,
            })
            .await
            .unwrap();
    }

    let location = controller.get(2).await.unwrap();
    assert_eq!(location.shelf.label, "B");

    // Removing shelf B orphans bin 2.
    shelves.delete(b.id).await.unwrap();

    let err = controller.get(2).await.unwrap_err();
    assert!(matches!(err, StoreError::Enrichment { entity: "Bin", .. }));

    let all = controller.get_all().await.unwrap();
    let slots: Vec<u32> = all.iter().map(|location| location.slot).collect();
    assert_eq!(slots, vec![1, 3]);
}

#[tokio::test]
async fn test_bulk_enrichment_may_be_empty() {
    let shelves = Arc::new(EntityStore::<Shelf>::new());
    let bins = Arc::new(EntityStore::<Bin>::new());
    let controller = EnrichingController::new(bins, Arc::new(ShelfLookup(shelves)));

    controller
        .create(Bin {
            id: 0,
            slot: 1,
            shelf_id: 42,
        })
        .await
        .unwrap();

    assert!(controller.get_all().await.unwrap().is_empty());
}
