//! End-to-end runs of the CIPC migration workflow against the scripted double

mod common;

use common::MockAxl;
use provision_engine::workflows::migrate;
use provision_engine::{ProvisionError, Script, SiteProfile};

use axl_core::model::{DeviceProfile, LineSummary, NameRef};

fn em_profile(name: &str) -> DeviceProfile {
    DeviceProfile {
        name: name.to_string(),
        description: Some("Jane Doe Agent".to_string()),
        lines: vec![LineSummary {
            index: 1,
            pattern: "1216053001".to_string(),
            route_partition: NameRef::named("PCCE_DN_PT"),
            e164_mask: Some("7135551234".to_string()),
            busy_trigger: Some(1),
            uuid: Some("{L1}".to_string()),
        }],
        uuid: Some("{EM}".to_string()),
    }
}

#[tokio::test]
async fn migrates_the_em_profile_onto_a_new_csf() {
    let mut api = MockAxl::default().with_user("E000123", Some("Corp Directory Sync"), "");
    api.profiles.insert("E000123_EM_8841".to_string(), em_profile("E000123_EM_8841"));
    api.removable.lock().unwrap().insert("e000123".to_string());
    let operator = Script::new(["e000123"]);
    let site = SiteProfile::default();

    let outcome = migrate::run(&api, &operator, &site).await.unwrap();

    assert_eq!(outcome.user_id, "E000123");
    assert_eq!(outcome.device_name, "CSFE000123");
    assert_eq!(outcome.profile_name, "E000123_EM_8841");
    assert!(outcome.old_device_removed);
    assert!(outcome.profile_removed);

    let phones = api.added_phones.lock().unwrap();
    let phone = &phones[0];
    assert_eq!(phone.description.as_deref(), Some("Jane Doe Agent"));
    assert_eq!(phone.device_pool, "Default");
    assert_eq!(phone.lines.len(), 1);
    assert_eq!(phone.lines[0].pattern, "1216053001");
    assert_eq!(phone.lines[0].e164_mask.as_deref(), Some("7135551234"));
    assert_eq!(phone.lines[0].dirn_uuid.as_deref(), Some("{L1}"));
    drop(phones);

    let updates = api.user_updates.lock().unwrap();
    assert_eq!(updates[0].im_and_presence_enable, Some(false));
    assert!(updates[0].primary_extension.is_none());
    drop(updates);

    assert!(api.associated("pguser", "CSFE000123"));
    assert!(api.associated("zoomjtapi", "CSFE000123"));
    assert_eq!(api.removed_profiles.lock().unwrap().as_slice(), ["E000123_EM_8841"]);

    assert_eq!(
        api.calls(),
        vec![
            "getDeviceProfile",
            "addPhone",
            "updateUser",
            "executeSQLUpdate",
            "executeSQLUpdate",
            "removePhone",
            "removeDeviceProfile",
        ]
    );
}

#[tokio::test]
async fn falls_back_to_the_8851_profile() {
    let mut api = MockAxl::default().with_user("E000123", Some("Corp Directory Sync"), "");
    api.profiles.insert("E000123_EM_8851".to_string(), em_profile("E000123_EM_8851"));
    api.removable.lock().unwrap().insert("e000123".to_string());
    let operator = Script::new(["e000123"]);
    let site = SiteProfile::default();

    let outcome = migrate::run(&api, &operator, &site).await.unwrap();

    assert_eq!(outcome.profile_name, "E000123_EM_8851");
    let calls = api.calls();
    assert_eq!(calls.iter().filter(|op| *op == "getDeviceProfile").count(), 2);
}

#[tokio::test]
async fn missing_both_profiles_terminates() {
    let api = MockAxl::default().with_user("E000123", Some("Corp Directory Sync"), "");
    let operator = Script::new(["e000123"]);
    let site = SiteProfile::default();

    let err = migrate::run(&api, &operator, &site).await.unwrap_err();
    assert!(matches!(err, ProvisionError::MissingProfile { .. }));
    assert!(operator.saw("No EM Profile Found"));
    assert!(api.added_phones.lock().unwrap().is_empty());
}

#[tokio::test]
async fn cleanup_retries_with_the_operator_supplied_device_id() {
    let mut api = MockAxl::default().with_user("E000123", Some("Corp Directory Sync"), "");
    api.profiles.insert("E000123_EM_8841".to_string(), em_profile("E000123_EM_8841"));
    // the CIPC is named by PC id, not by e-number
    api.removable.lock().unwrap().insert("Sep001122334455".to_string());
    let operator = Script::new(["e000123", "sep001122334455"]);
    let site = SiteProfile::default();

    let outcome = migrate::run(&api, &operator, &site).await.unwrap();

    assert!(outcome.old_device_removed);
    let calls = api.calls();
    assert_eq!(calls.iter().filter(|op| *op == "removePhone").count(), 2);
}

#[tokio::test]
async fn cleanup_faults_do_not_fail_the_migration() {
    let mut api = MockAxl::default().with_user("E000123", Some("Corp Directory Sync"), "");
    api.profiles.insert("E000123_EM_8841".to_string(), em_profile("E000123_EM_8841"));
    // nothing removable: both removePhone attempts fault
    let operator = Script::new(["e000123", "sep999"]);
    let site = SiteProfile::default();

    let outcome = migrate::run(&api, &operator, &site).await.unwrap();

    assert!(!outcome.old_device_removed);
    assert!(outcome.profile_removed);
    assert!(operator.saw("removePhone:"));
    // the CSF itself was still provisioned
    assert_eq!(api.added_phones.lock().unwrap().len(), 1);
}
