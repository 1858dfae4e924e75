// Allocator behavior tests

use super::*;
use crate::catalog::ProfileTemplate;
use crate::store::{FsStore, MemoryStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

/// One template per category, easy to recognize in assertions
fn small_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog
        .add_template(Category::Desktop, ProfileTemplate::new("MS-7B86", "11.0.22000", "4.16.6", "en", "en"))
        .unwrap();
    catalog
        .add_template(
            Category::MobileAndroid,
            ProfileTemplate::new("Samsung Galaxy S23", "13", "10.14.3", "en", "en"),
        )
        .unwrap();
    catalog
        .add_template(
            Category::MobileIos,
            ProfileTemplate::new("iPhone 15 Pro", "17.2.0", "10.5.1", "en", "en"),
        )
        .unwrap();
    catalog
}

fn allocator(catalog: Catalog) -> DeviceProfileAllocator {
    DeviceProfileAllocator::new(catalog, AllocatorConfig::default()).unwrap()
}

// ---------------------------------------------------------------
// Idempotence and determinism
// ---------------------------------------------------------------

#[test]
fn test_resolve_is_idempotent() {
    let mut alloc = DeviceProfileAllocator::with_builtin_catalog();
    let first = alloc.resolve("1234567890", None).unwrap();
    for _ in 0..5 {
        assert_eq!(alloc.resolve("1234567890", None).unwrap(), first);
    }
    assert_eq!(alloc.summarize().total, 1);
    assert_eq!(alloc.len(), 1);
}

#[test]
fn test_known_identifier_lands_on_desktop() {
    // md5("1234567890") = e807f1fc f82d...; 0xe807f1fc % 100 = 12 -> desktop
    let mut alloc = allocator(small_catalog());
    let profile = alloc.resolve("1234567890", None).unwrap();
    assert_eq!(profile.category, Some(Category::Desktop));
    assert_eq!(profile.device_model, "MS-7B86");
    assert_eq!(profile.system_version, "11.0.22000");
    assert_eq!(profile.app_version, "4.16.3");
}

#[test]
fn test_builtin_allocation_for_known_identifier() {
    // 63533 % 219 = 23 -> builtin desktop row 23
    let mut alloc = DeviceProfileAllocator::with_builtin_catalog();
    let profile = alloc.resolve("1234567890", None).unwrap();
    let template = &alloc.catalog().templates(Category::Desktop)[63_533 % 219];
    assert_eq!(profile.device_model, template.device_model);
    assert_eq!(profile.system_version, template.system_version);
    assert_eq!(profile.app_version, "4.14.3");
    assert_eq!(profile.lang_code, template.lang_code);
}

/// (identifier, device_model, system_version, app_version, lang_code)
type Expected = (&'static str, &'static str, &'static str, &'static str, &'static str);

fn assert_allocations(preferred: Option<Category>, expected: &[Expected]) {
    let alloc = DeviceProfileAllocator::with_builtin_catalog();
    for &(id, model, system, app, lang) in expected {
        let profile = alloc.preview(id, preferred).unwrap();
        assert_eq!(
            (
                profile.device_model.as_str(),
                profile.system_version.as_str(),
                profile.app_version.as_str(),
                profile.lang_code.as_str()
            ),
            (model, system, app, lang),
            "identifier {}",
            id
        );
    }
}

// Values produced by the assignment files already in use for these identifiers

#[test]
fn test_builtin_weighted_allocations_are_pinned() {
    assert_allocations(
        None,
        &[
            ("1234567890", "Pavilion 15-cs0xxx", "10.0.16299.2709", "4.14.3", "ro"),
            ("9876543210", "B360M MORTAR", "10.0.19045", "4.16.1", "en"),
            ("5555555555", "MacPro6,1", "13.1.0", "10.3.6", "ro"),
            ("1111111111", "MacBookPro13,3", "14.1.1", "10.4.8", "fr"),
            ("2222222222", "MS-7B86", "11.0.22000", "4.16.7", "en"),
            ("3333333333", "MacBookAir4,2", "11.6.2", "10.0.3", "nl"),
        ],
    );
}

#[test]
fn test_builtin_android_allocations_are_pinned() {
    // Only samsung/xiaomi/android names get a patched system version
    assert_allocations(
        Some(Category::MobileAndroid),
        &[
            ("1234567890", "OPPO Reno10 Pro", "13", "10.13.3", "en"),
            ("9876543210", "OnePlus 12", "14", "10.14.1", "en"),
            ("5555555555", "Pixel 8 Pro", "14", "10.14.6", "en"),
            ("1111111111", "Samsung Galaxy S22", "13.7", "10.14.8", "en"),
            ("2222222222", "Redmi Note 13 Pro", "13", "10.13.7", "en"),
            ("3333333333", "OnePlus 11", "13", "10.14.3", "en"),
        ],
    );
}

#[test]
fn test_builtin_ios_allocations_are_pinned() {
    assert_allocations(
        Some(Category::MobileIos),
        &[
            ("1234567890", "iPhone SE (3rd generation)", "16.2.8", "10.3.3", "en"),
            ("9876543210", "iPhone 13 mini", "16.4.5", "10.4.1", "en"),
            ("5555555555", "iPhone 12", "16.3.0", "10.3.6", "en"),
            ("1111111111", "iPhone 15", "17.1.6", "10.5.8", "en"),
            ("2222222222", "iPhone SE (3rd generation)", "16.2.7", "10.3.7", "en"),
            ("3333333333", "iPhone 13 Pro", "16.5.2", "10.4.3", "en"),
        ],
    );
}

#[test]
fn test_fresh_instances_agree() {
    let mut a = DeviceProfileAllocator::with_builtin_catalog();
    let mut b = DeviceProfileAllocator::with_builtin_catalog();
    for id in ["alice", "bob", "+15550001111", "1234567890", "x"] {
        assert_eq!(a.resolve(id, None).unwrap(), b.resolve(id, None).unwrap());
    }
}

#[test]
fn test_preview_does_not_store() {
    let alloc = DeviceProfileAllocator::with_builtin_catalog();
    let preview = alloc.preview("carol", None).unwrap();
    assert!(alloc.get("carol").is_none());

    let mut alloc = alloc;
    assert_eq!(alloc.resolve("carol", None).unwrap(), preview);
}

#[test]
fn test_cached_profile_survives_catalog_edits() {
    let mut alloc = allocator(small_catalog());
    let before = alloc.resolve("1234567890", None).unwrap();

    alloc
        .catalog_mut()
        .edit_template(
            Category::Desktop,
            0,
            ProfileTemplate::new("B360M MORTAR", "10.0.19045", "4.16.8", "en", "en"),
        )
        .unwrap();

    assert_eq!(alloc.resolve("1234567890", None).unwrap(), before);
    assert_eq!(alloc.reassign("1234567890", None).unwrap().device_model, "B360M MORTAR");
}

// ---------------------------------------------------------------
// Category selection
// ---------------------------------------------------------------

#[test]
fn test_preferred_category_overrides_weights() {
    let mut alloc = allocator(small_catalog());
    let profile = alloc.resolve("1234567890", Some(Category::MobileIos)).unwrap();
    assert_eq!(profile.category, Some(Category::MobileIos));
    assert_eq!(profile.device_model, "iPhone 15 Pro");
    // 0xf1fc % 10 = 8, 0xf82d % 10 = 3
    assert_eq!(profile.system_version, "17.2.8");
    assert_eq!(profile.app_version, "10.5.3");
}

#[test]
fn test_weight_distribution() {
    let mut rng = StdRng::seed_from_u64(7);
    let alloc = allocator(small_catalog());
    let samples = 20_000;
    let mut counts: BTreeMap<Category, usize> = BTreeMap::new();

    for _ in 0..samples {
        let id = format!("{:016x}", rng.gen::<u64>());
        let profile = alloc.preview(&id, None).unwrap();
        *counts.entry(profile.category.unwrap()).or_insert(0) += 1;
    }

    let share = |c: Category| counts.get(&c).copied().unwrap_or(0) as f64 / samples as f64;
    assert!((share(Category::Desktop) - 0.90).abs() < 0.02, "desktop {}", share(Category::Desktop));
    assert!((share(Category::MobileAndroid) - 0.05).abs() < 0.02);
    assert!((share(Category::MobileIos) - 0.05).abs() < 0.02);
}

#[test]
fn test_weights_pick_boundaries() {
    let weights = CategoryWeights::default();
    assert_eq!(weights.pick(0), Category::Desktop);
    assert_eq!(weights.pick(89), Category::Desktop);
    assert_eq!(weights.pick(90), Category::MobileAndroid);
    assert_eq!(weights.pick(94), Category::MobileAndroid);
    assert_eq!(weights.pick(95), Category::MobileIos);
    assert_eq!(weights.pick(99), Category::MobileIos);

    let all_ios = CategoryWeights { desktop: 0, mobile_android: 0, mobile_ios: 100 };
    assert_eq!(all_ios.pick(0), Category::MobileIos);
}

#[test]
fn test_invalid_weights_rejected() {
    let config = AllocatorConfig {
        weights: CategoryWeights { desktop: 50, mobile_android: 5, mobile_ios: 5 },
        ..Default::default()
    };
    assert!(matches!(
        DeviceProfileAllocator::new(small_catalog(), config),
        Err(DevprofError::InvalidWeights(_))
    ));
}

#[test]
fn test_blake3_allocation_is_deterministic() {
    let config = AllocatorConfig { digest: DigestAlgorithm::Blake3, ..Default::default() };
    let a = DeviceProfileAllocator::new(Catalog::builtin(), config.clone()).unwrap();
    let b = DeviceProfileAllocator::new(Catalog::builtin(), config).unwrap();
    assert_eq!(a.preview("dave", None).unwrap(), b.preview("dave", None).unwrap());
}

// ---------------------------------------------------------------
// Release / reset
// ---------------------------------------------------------------

#[test]
fn test_release_then_resolve() {
    let mut alloc = DeviceProfileAllocator::with_builtin_catalog();
    alloc.resolve("erin", None).unwrap();

    assert!(alloc.release("erin"));
    assert!(alloc.get("erin").is_none());
    assert!(!alloc.release("erin"));

    let again = alloc.resolve("erin", Some(Category::MobileAndroid)).unwrap();
    assert_eq!(again.category, Some(Category::MobileAndroid));
    assert_eq!(alloc.resolve("erin", None).unwrap(), again);
}

#[test]
fn test_release_unknown_is_noop() {
    let mut alloc = DeviceProfileAllocator::with_builtin_catalog();
    assert!(!alloc.release("nobody"));
    assert!(alloc.is_empty());
}

#[test]
fn test_reset_returns_former_identifiers() {
    let mut alloc = DeviceProfileAllocator::with_builtin_catalog();
    for id in ["b", "a", "c"] {
        alloc.resolve(id, None).unwrap();
    }
    assert_eq!(alloc.reset(), vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    assert!(alloc.is_empty());
}

// ---------------------------------------------------------------
// Empty categories
// ---------------------------------------------------------------

#[test]
fn test_empty_preferred_category_fails() {
    let mut catalog = small_catalog();
    catalog.delete_template(Category::MobileIos, 0).unwrap();
    let mut alloc = allocator(catalog);

    let err = alloc.resolve("1234567890", Some(Category::MobileIos)).unwrap_err();
    assert!(matches!(err, DevprofError::EmptyCategory(Category::MobileIos)));
    assert!(alloc.is_empty());
}

#[test]
fn test_empty_weighted_category_fails() {
    let mut alloc = allocator(Catalog::new());
    assert!(matches!(
        alloc.resolve("1234567890", None),
        Err(DevprofError::EmptyCategory(Category::Desktop))
    ));
}

// ---------------------------------------------------------------
// Summary and classification
// ---------------------------------------------------------------

#[test]
fn test_summary_counts_by_model_name() {
    let mut alloc = allocator(small_catalog());
    alloc.resolve("a", Some(Category::Desktop)).unwrap();
    alloc.resolve("b", Some(Category::MobileAndroid)).unwrap();
    alloc.resolve("c", Some(Category::MobileAndroid)).unwrap();
    alloc.resolve("d", Some(Category::MobileIos)).unwrap();

    let summary = alloc.summarize();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.android, 2);
    assert_eq!(summary.ios, 1);
    // "MS-7B86" carries no desktop keyword
    assert_eq!(summary.desktop, 0);
    assert_eq!(summary.unknown, 1);
    assert_eq!(summary.models.get("Samsung Galaxy S23"), Some(&2));
}

#[test]
fn test_model_name_patch_branch_is_narrower_than_summary() {
    let mut catalog = Catalog::new();
    for model in ["OPPO Reno10 Pro", "Xiaomi 14 Pro"] {
        catalog
            .add_template(Category::MobileAndroid, ProfileTemplate::new(model, "13", "10.13.0", "en", "en"))
            .unwrap();
    }
    let mut alloc = allocator(catalog);
    // 0xf82d % 2 = 1 -> Xiaomi, 0xe807 % 10 = 9
    let profile = alloc.resolve("1234567890", Some(Category::MobileAndroid)).unwrap();
    assert_eq!(profile.device_model, "Xiaomi 14 Pro");
    assert_eq!(profile.system_version, "13.9");

    let mut oppo_only = Catalog::new();
    oppo_only
        .add_template(
            Category::MobileAndroid,
            ProfileTemplate::new("OPPO Reno10 Pro", "13", "10.13.0", "en", "en"),
        )
        .unwrap();
    let mut alloc = allocator(oppo_only);
    let profile = alloc.resolve("1234567890", Some(Category::MobileAndroid)).unwrap();
    assert_eq!(profile.system_version, "13");
    assert_eq!(profile.app_version, "10.13.3");
    assert_eq!(alloc.summarize().android, 1);
}

#[test]
fn test_stored_category_mode() {
    let mut catalog = Catalog::new();
    catalog
        .add_template(
            Category::Desktop,
            ProfileTemplate::new("VivoBook S14 S4300", "14", "4.16.2", "en", "en"),
        )
        .unwrap();

    // Model-name mode counts the laptop as android but leaves its version alone
    let mut by_name = allocator(catalog.clone());
    let profile = by_name.resolve("acct", Some(Category::Desktop)).unwrap();
    assert_eq!(profile.system_version, "14");
    assert_eq!(by_name.summarize().android, 1);

    let config = AllocatorConfig {
        classification: ClassificationMode::StoredCategory,
        ..Default::default()
    };
    let mut by_category = DeviceProfileAllocator::new(catalog, config).unwrap();
    let profile = by_category.resolve("acct", Some(Category::Desktop)).unwrap();
    assert_eq!(profile.system_version, "14");
    let summary = by_category.summarize();
    assert_eq!(summary.desktop, 1);
    assert_eq!(summary.android, 0);
}

// ---------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------

#[test]
fn test_persist_load_round_trip() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("resources").join("device_assignments.json");

    let mut alloc = DeviceProfileAllocator::with_builtin_catalog();
    for id in ["1234567890", "9876543210", "5555555555"] {
        alloc.resolve(id, None).unwrap();
    }
    alloc.resolve("1111111111", Some(Category::MobileIos)).unwrap();
    alloc.persist(&FsStore, &path).unwrap();

    let mut fresh = DeviceProfileAllocator::with_builtin_catalog();
    assert!(fresh.load(&FsStore, &path).unwrap());
    let original: Vec<_> = alloc.assignments().collect();
    let loaded: Vec<_> = fresh.assignments().collect();
    assert_eq!(original, loaded);
}

#[test]
fn test_load_missing_file_is_empty() {
    let mut alloc = DeviceProfileAllocator::with_builtin_catalog();
    alloc.resolve("x", None).unwrap();
    assert!(!alloc.load(&MemoryStore::new(), Path::new("none.json")).unwrap());
    assert!(alloc.is_empty());
}

#[test]
fn test_load_reads_untagged_entries() {
    let store = MemoryStore::new();
    let path = Path::new("device_assignments.json");
    store
        .write_text(
            path,
            r#"{"1234567890": {"device_model": "iPhone 15", "system_version": "17.1.4",
                "app_version": "10.5.7", "lang_code": "en", "system_lang_code": "en"}}"#,
        )
        .unwrap();

    let mut alloc = DeviceProfileAllocator::with_builtin_catalog();
    assert!(alloc.load(&store, path).unwrap());
    let profile = alloc.resolve("1234567890", None).unwrap();
    assert_eq!(profile.device_model, "iPhone 15");
    assert_eq!(profile.category, None);

    // Untagged entries are written back without a category field
    alloc.persist(&store, path).unwrap();
    let written = store.read_text(path).unwrap().unwrap();
    assert!(!written.contains("category"));
}

#[test]
fn test_load_malformed_fails_closed() {
    let store = MemoryStore::new();
    let path = Path::new("device_assignments.json");
    let mut alloc = DeviceProfileAllocator::with_builtin_catalog();
    alloc.resolve("keep-me", None).unwrap();

    // second entry lacks app_version
    store
        .write_text(
            path,
            r#"{"a": {"device_model": "MS-7B86", "system_version": "11.0", "app_version": "4.16.1",
                      "lang_code": "en", "system_lang_code": "en"},
                "b": {"device_model": "MS-7B86", "system_version": "11.0",
                      "lang_code": "en", "system_lang_code": "en"}}"#,
        )
        .unwrap();
    let err = alloc.load(&store, path).unwrap_err();
    assert!(matches!(err, DevprofError::MalformedAssignmentData { .. }));
    assert!(alloc.is_empty());

    store.write_text(path, "[1, 2, 3]").unwrap();
    assert!(alloc.load(&store, path).unwrap_err().is_read_failure());

    store.write_text(path, "{\"a\": ").unwrap();
    assert!(alloc.load(&store, path).is_err());
    assert!(alloc.is_empty());
}

/// Store whose reads always fail, as with a permission error
struct UnreadableStore;

impl TextStore for UnreadableStore {
    fn read_text(&self, _path: &Path) -> std::io::Result<Option<String>> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"))
    }

    fn write_text(&self, _path: &Path, _content: &str) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_read_error_clears_assignments() {
    let mut alloc = DeviceProfileAllocator::with_builtin_catalog();
    alloc.resolve("grace", None).unwrap();

    let err = alloc.load(&UnreadableStore, Path::new("device_assignments.json")).unwrap_err();
    assert!(matches!(err, DevprofError::PersistenceRead { .. }));
    assert!(err.is_read_failure());
    assert!(alloc.is_empty());
}

#[test]
fn test_search_matches_literal_text() {
    let mut catalog = small_catalog();
    catalog
        .add_template(
            Category::MobileIos,
            ProfileTemplate::new("iPad Air (5th generation)", "16.1.0", "10.3.1", "en", "en"),
        )
        .unwrap();
    let mut alloc = allocator(catalog);
    for id in ["a", "b", "c", "d", "e", "f", "g", "h"] {
        alloc.resolve(id, Some(Category::MobileIos)).unwrap();
    }
    alloc.resolve("desk", Some(Category::Desktop)).unwrap();

    let ipads = AssignmentFilter::new(Some("ipad air (5th"), None).unwrap();
    let expected: Vec<_> = alloc
        .assignments()
        .filter(|(_, p)| p.device_model.starts_with("iPad"))
        .map(|(id, _)| id)
        .collect();
    let found: Vec<_> = alloc.search(&ipads).map(|(id, _)| id).collect();
    assert_eq!(found, expected);

    let ios = AssignmentFilter::new(None, Some(ModelClass::Ios)).unwrap();
    assert_eq!(alloc.search(&ios).count(), 8);

    let desk = AssignmentFilter::new(Some("DESK"), None).unwrap();
    assert_eq!(alloc.search(&desk).map(|(id, _)| id).collect::<Vec<_>>(), ["desk"]);
}

#[test]
fn test_persist_failure_keeps_memory() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();

    let mut alloc = DeviceProfileAllocator::with_builtin_catalog();
    alloc.resolve("frank", None).unwrap();
    let err = alloc.persist(&FsStore, &blocker.join("a.json")).unwrap_err();
    assert!(matches!(err, DevprofError::PersistenceWrite { .. }));
    assert!(alloc.get("frank").is_some());
}
