#![allow(clippy::unwrap_used)]
// End-to-end command flows against an in-memory inventory.

mod common;

use pretty_assertions::assert_eq;

use common::{Recorder, Sent, acme, answer, run, try_run};
use merakiops_core::model::{NeighborRecord, PortNeighbors, SwitchPort, UpdateSwitchPortRequest};
use merakiops_core::{
    Block, CommandSpec, CommandStatus, Context, CoreError, FieldInput, Outcome, ParamSpec,
    Registry, Resolver,
};

fn menu(sent: &Sent) -> (&str, &str, Vec<&str>) {
    match sent {
        Sent::Menu {
            followup,
            title,
            choices,
        } => (
            followup.as_str(),
            title.as_str(),
            choices.iter().map(|c| c.value.as_str()).collect(),
        ),
        other => panic!("expected a menu, got {other:?}"),
    }
}

fn last_table(sent: &[Sent]) -> &merakiops_core::Table {
    sent.iter()
        .rev()
        .find_map(|s| match s {
            Sent::Table(t) => Some(t),
            _ => None,
        })
        .expect("no table sent")
}

// ── Registry ────────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_command_is_an_error() {
    let inv = acme();
    let rec = Recorder::default();

    let err = try_run(&inv, &rec, "meraki get-toasters").await.unwrap_err();

    assert!(matches!(err, CoreError::UnknownCommand { .. }), "{err:?}");
    let err = try_run(&inv, &rec, "cisco get-organizations")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::UnknownCommand { .. }), "{err:?}");
    assert!(rec.take().is_empty());
}

#[test]
fn every_command_is_registered() {
    let registry = Registry::with_meraki_commands("meraki");
    let names: Vec<&str> = registry.commands("meraki").map(|c| c.name).collect();
    for expected in [
        "get-organizations",
        "get-admins",
        "get-devices",
        "get-networks",
        "get-switchports",
        "get-switchports-status",
        "get-firewall-performance",
        "get-network-ssids",
        "get-camera-recent",
        "get-clients",
        "get-lldp-cdp",
        "configure-basic-access-port",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
    }
    assert_eq!(names.len(), 12);
}

#[tokio::test]
async fn get_organizations_is_idempotent() {
    let inv = acme();
    let rec = Recorder::default();

    let first = run(&inv, &rec, "meraki get-organizations").await;
    let first_sent = rec.take();
    let second = run(&inv, &rec, "meraki get-organizations").await;
    let second_sent = rec.take();

    assert_eq!(first, Outcome::Finished(CommandStatus::Succeeded));
    assert_eq!(first, second);
    assert_eq!(first_sent, second_sent);
    assert_eq!(
        first_sent[0],
        Sent::Markdown("Stand by @jane, I'm getting the Organizations!".into())
    );
    assert_eq!(last_table(&first_sent).rows.len(), 2);
}

// ── Progressive completion ──────────────────────────────────────────

#[tokio::test]
async fn get_devices_prompts_one_parameter_at_a_time() {
    let inv = acme();
    let rec = Recorder::default();

    // Nothing bound: organization menu.
    let outcome = run(&inv, &rec, "meraki get-devices").await;
    assert_eq!(outcome, Outcome::Incomplete);
    let sent = rec.take();
    assert_eq!(sent.len(), 1);
    let (followup, title, values) = menu(&sent[0]);
    assert_eq!(title, "Select an Organization");
    assert_eq!(values, vec!["Acme Corp", "Globex"]);
    assert_eq!(
        shlex::split(followup).unwrap(),
        vec!["meraki", "get-devices", "--"]
    );

    // Organization answered: device-type menu, org carried in the follow-up.
    let line = answer(followup, "Acme Corp");
    let outcome = run(&inv, &rec, &line).await;
    assert_eq!(outcome, Outcome::Incomplete);
    let sent = rec.take();
    let (followup, title, values) = menu(&sent[0]);
    assert_eq!(title, "Select a Device Type");
    assert_eq!(values, vec!["all", "aps", "cameras", "firewalls", "switches"]);
    assert_eq!(
        shlex::split(followup).unwrap(),
        vec!["meraki", "get-devices", "org_name=Acme Corp", "--"]
    );

    // Both bound: filtered device table.
    let outcome = run(&inv, &rec, &answer(followup, "switches")).await;
    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    let sent = rec.take();
    let table = last_table(&sent);
    let serials: Vec<&str> = (0..table.rows.len())
        .map(|i| table.cell(i, "Serial").unwrap())
        .collect();
    assert_eq!(serials, vec!["Q2SW-0001", "Q2SW-0002"]);
}

#[tokio::test]
async fn device_menu_is_filtered_and_skips_unnamed() {
    let inv = acme();
    let rec = Recorder::default();

    run(&inv, &rec, "meraki get-switchports 'Acme Corp'").await;
    let sent = rec.take();
    let (_, title, values) = menu(&sent[0]);
    assert_eq!(title, "Select a Switch");
    assert_eq!(values, vec!["core-sw"]);

    run(&inv, &rec, "meraki get-firewall-performance 'Acme Corp'").await;
    let sent = rec.take();
    let (_, _, values) = menu(&sent[0]);
    assert_eq!(values, vec!["edge-fw"]);

    run(&inv, &rec, "meraki get-camera-recent 'Acme Corp'").await;
    let sent = rec.take();
    let (_, _, values) = menu(&sent[0]);
    assert_eq!(values, vec!["door-cam"]);

    run(&inv, &rec, "meraki get-lldp-cdp 'Acme Corp'").await;
    let sent = rec.take();
    let (_, _, values) = menu(&sent[0]);
    assert_eq!(values, vec!["core-sw", "lobby-ap", "edge-fw", "door-cam"]);
}

#[tokio::test]
async fn empty_device_menu_is_reported_not_prompted() {
    let inv = acme();
    let rec = Recorder::default();

    let outcome = run(&inv, &rec, "meraki get-camera-recent Globex").await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Failed));
    let sent = rec.take();
    assert_eq!(sent.len(), 1);
    assert!(matches!(&sent[0], Sent::Warning(w) if w.contains("Globex")));
}

#[tokio::test]
async fn network_menu_then_ssids() {
    let inv = acme();
    let rec = Recorder::default();

    run(&inv, &rec, "meraki get-network-ssids org_name='Acme Corp'").await;
    let sent = rec.take();
    let (followup, title, values) = menu(&sent[0]);
    assert_eq!(title, "Select a Network");
    assert_eq!(values, vec!["HQ"]);

    let outcome = run(&inv, &rec, &answer(followup, "HQ")).await;
    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    let sent = rec.take();
    assert_eq!(last_table(&sent).cell(0, "Name"), Some("Corp"));
}

#[tokio::test]
async fn dependency_on_later_parameter_fails_fast() {
    const BROKEN: &[ParamSpec] = &[
        ParamSpec::menu(
            "device_name",
            "Select a Device",
            merakiops_core::ChoiceSource::Devices(merakiops_core::DeviceCategory::All),
            &["org_name"],
        ),
        ParamSpec::menu(
            "org_name",
            "Select an Organization",
            merakiops_core::ChoiceSource::Organizations,
            &[],
        ),
    ];
    fn never<'a>(
        _ctx: Context<'a>,
        _params: &'a merakiops_core::Params,
    ) -> futures::future::BoxFuture<'a, Result<CommandStatus, CoreError>> {
        Box::pin(async { Ok(CommandStatus::Succeeded) })
    }

    let mut registry = Registry::new();
    registry.register(
        "meraki",
        CommandSpec {
            name: "broken",
            summary: "",
            params: BROKEN,
            action: never,
        },
    );
    let inv = acme();
    let rec = Recorder::default();

    let err = registry
        .dispatch_line(Context::new(&inv, &rec), "meraki broken")
        .await
        .unwrap_err();

    assert!(matches!(err, CoreError::Internal(_)), "{err:?}");
    assert!(rec.take().is_empty(), "no prompt may be sent");
}

// ── Read commands ───────────────────────────────────────────────────

#[tokio::test]
async fn get_admins_lists_the_organization_admins() {
    let inv = acme();
    let rec = Recorder::default();

    let outcome = run(&inv, &rec, "meraki get-admins 'Acme Corp'").await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    let sent = rec.take();
    let table = last_table(&sent);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.cell(0, "Name"), Some("Jane Doe"));
    assert_eq!(table.cell(0, "Email"), Some("jane@acme.test"));
    assert_eq!(table.cell(0, "Org Access"), Some("full"));
}

#[tokio::test]
async fn get_networks_lists_the_organization_networks() {
    let inv = acme();
    let rec = Recorder::default();

    let outcome = run(&inv, &rec, "meraki get-networks 'Acme Corp'").await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    let sent = rec.take();
    let table = last_table(&sent);
    assert_eq!(table.cell(0, "Name"), Some("HQ"));
    assert_eq!(table.cell(0, "ID"), Some("L_1"));
    assert_eq!(table.cell(0, "Product Types"), Some("switch"));
}

#[tokio::test]
async fn get_switchports_lists_the_switch_ports() {
    let inv = acme();
    let rec = Recorder::default();

    let outcome = run(&inv, &rec, "meraki get-switchports 'Acme Corp' core-sw").await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    let sent = rec.take();
    let table = last_table(&sent);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.cell(0, "Port"), Some("1"));
    assert_eq!(table.cell(0, "Name"), Some("Uplink"));
    assert_eq!(table.cell(1, "Enabled"), Some("Yes"));
}

#[tokio::test]
async fn get_switchports_status_shows_usage_and_warnings() {
    let inv = acme();
    let rec = Recorder::default();

    let outcome = run(&inv, &rec, "meraki get-switchports-status 'Acme Corp' core-sw").await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    let sent = rec.take();
    let table = last_table(&sent);
    assert_eq!(table.cell(0, "Status"), Some("Connected"));
    assert_eq!(table.cell(0, "Clients"), Some("3"));
    assert_eq!(table.cell(0, "Sent (kB)"), Some("120"));
    assert_eq!(table.cell(0, "Recv (kB)"), Some("80"));
    assert_eq!(table.cell(0, "Warnings"), Some("PoE overload"));
}

#[tokio::test]
async fn get_firewall_performance_sends_the_score() {
    let inv = acme();
    let rec = Recorder::default();

    let outcome = run(&inv, &rec, "meraki get-firewall-performance 'Acme Corp' edge-fw").await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    let sent = rec.take();
    assert_eq!(
        sent.last(),
        Some(&Sent::Blocks(vec![
            Block::header("Performance for edge-fw"),
            Block::markdown("Performance score: *42*"),
        ]))
    );
}

#[tokio::test]
async fn get_camera_recent_lists_zone_analytics() {
    let inv = acme();
    let rec = Recorder::default();

    let outcome = run(&inv, &rec, "meraki get-camera-recent 'Acme Corp' door-cam").await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    let sent = rec.take();
    let table = last_table(&sent);
    assert_eq!(table.cell(0, "Zone"), Some("0"));
    assert_eq!(table.cell(0, "Start"), Some("2024-03-01 10:00:00"));
    assert_eq!(table.cell(0, "Entrances"), Some("4"));
    assert_eq!(table.cell(0, "Average Count"), Some("1.50"));
}

#[tokio::test]
async fn get_clients_lists_the_device_clients() {
    let inv = acme();
    let rec = Recorder::default();

    let outcome = run(&inv, &rec, "meraki get-clients 'Acme Corp' lobby-ap").await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    let sent = rec.take();
    let table = last_table(&sent);
    assert_eq!(table.cell(0, "Description"), Some("laptop-17"));
    assert_eq!(table.cell(0, "MAC"), Some("aa:bb:cc:00:11:22"));
    assert_eq!(table.cell(0, "VLAN"), Some("10"));
    assert_eq!(table.cell(0, "Sent (kB)"), Some("512"));
}

// ── Resolution ──────────────────────────────────────────────────────

#[tokio::test]
async fn organization_resolution_ignores_case() {
    let inv = acme();
    let resolver = Resolver::new(&inv);

    assert_eq!(resolver.resolve_organization_id("Acme Corp").await.unwrap(), "1");
    assert_eq!(resolver.resolve_organization_id("acme corp").await.unwrap(), "1");
    assert_eq!(resolver.resolve_organization_id("ACME CORP").await.unwrap(), "1");
    assert!(matches!(
        resolver.resolve_organization_id("Acme").await,
        Err(CoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn each_resolution_queries_the_inventory() {
    let inv = acme();
    let resolver = Resolver::new(&inv);

    resolver.resolve_organization_id("Acme Corp").await.unwrap();
    resolver
        .resolve_device_serial("Acme Corp", "core-sw")
        .await
        .unwrap();

    assert_eq!(*inv.org_list_calls.lock().unwrap(), 2);
}

#[tokio::test]
async fn device_and_network_names_match_exactly() {
    let inv = acme();
    let resolver = Resolver::new(&inv);

    assert_eq!(
        resolver
            .resolve_device_serial("acme corp", "core-sw")
            .await
            .unwrap(),
        "Q2SW-0001"
    );
    assert!(resolver.resolve_device_serial("Acme Corp", "Core-SW").await.is_err());
    assert_eq!(
        resolver.resolve_network_id("Acme Corp", "HQ").await.unwrap(),
        "L_1"
    );
    assert!(resolver.resolve_network_id("Acme Corp", "hq").await.is_err());
}

#[tokio::test]
async fn unknown_organization_warns_and_fails() {
    let inv = acme();
    let rec = Recorder::default();

    let outcome = run(&inv, &rec, "meraki get-admins Initech").await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Failed));
    let sent = rec.take();
    assert!(matches!(sent.last(), Some(Sent::Warning(w)) if w.contains("Initech")));
    assert!(!sent.iter().any(|s| matches!(s, Sent::Table(_))));
}

// ── Empty vs error ──────────────────────────────────────────────────

#[tokio::test]
async fn lldp_cdp_without_neighbors_is_a_success() {
    let mut inv = acme();
    inv.neighbors.insert(
        "Q2SW-0001".into(),
        NeighborRecord {
            source_mac: None,
            ports: [("1".to_owned(), PortNeighbors::default())]
                .into_iter()
                .collect(),
        },
    );
    let rec = Recorder::default();

    let outcome = run(&inv, &rec, "meraki get-lldp-cdp 'Acme Corp' core-sw").await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    let sent = rec.take();
    assert_eq!(
        sent.last(),
        Some(&Sent::Markdown(
            "No CDP or LLDP neighbors found for core-sw.".into()
        ))
    );
    assert!(!sent.iter().any(|s| matches!(s, Sent::Table(_) | Sent::Warning(_))));
}

#[tokio::test]
async fn lldp_cdp_upstream_error_warns_and_fails() {
    let mut inv = acme();
    inv.failing.push("Q2SW-0001".into());
    let rec = Recorder::default();

    let outcome = run(&inv, &rec, "meraki get-lldp-cdp 'Acme Corp' core-sw").await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Failed));
    let sent = rec.take();
    let warnings: Vec<&Sent> = sent
        .iter()
        .filter(|s| matches!(s, Sent::Warning(_)))
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], Sent::Warning(w) if w.contains("unreachable")));
    assert!(!sent.iter().any(|s| matches!(s, Sent::Table(_))));
}

// ── Access port configuration ───────────────────────────────────────

#[tokio::test]
async fn configure_access_port_writes_once_and_renders_applied_state() {
    let mut inv = acme();
    // The Dashboard normalizes the description and reports the VLAN it applied.
    inv.update_response = Some(SwitchPort {
        port_id: "1".into(),
        name: Some("UPLINK".into()),
        enabled: true,
        port_type: Some("access".into()),
        vlan: Some(11),
        voice_vlan: Some(20),
        stp_guard: Some("bpdu guard".into()),
        ..SwitchPort::default()
    });
    let rec = Recorder::default();

    let outcome = run(
        &inv,
        &rec,
        "meraki configure-basic-access-port 'Acme Corp' core-sw 1 true 10 Uplink",
    )
    .await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    assert_eq!(
        inv.updates(),
        vec![(
            "Q2SW-0001".to_owned(),
            "1".to_owned(),
            UpdateSwitchPortRequest {
                name: Some("Uplink".into()),
                enabled: Some(true),
                port_type: Some("access".into()),
                vlan: Some(10),
            }
        )]
    );

    let sent = rec.take();
    let table = last_table(&sent);
    assert_eq!(table.headers, vec!["Port Setting", "Value"]);
    let value = |key: &str| {
        table
            .rows
            .iter()
            .find(|r| r[0] == key)
            .map(|r| r[1].clone())
    };
    assert_eq!(value("name").as_deref(), Some("UPLINK"));
    assert_eq!(value("vlan").as_deref(), Some("11"));
    assert_eq!(value("voiceVlan").as_deref(), Some("20"));
    assert_eq!(value("stpGuard").as_deref(), Some("bpdu guard"));
}

#[tokio::test]
async fn dialog_answers_that_look_like_parameters_stay_positional() {
    let inv = acme();
    let rec = Recorder::default();

    run(&inv, &rec, "meraki configure-basic-access-port 'Acme Corp' core-sw 2").await;
    let sent = rec.take();
    let Sent::Dialog {
        group, followup, ..
    } = &sent[0]
    else {
        panic!("expected a dialog, got {:?}", sent[0]);
    };

    let line = format!("{group} {followup} true 10 'vlan=30 phones'");
    let outcome = run(&inv, &rec, &line).await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    let (_, port_id, update) = inv.updates().pop().unwrap();
    assert_eq!(port_id, "2");
    assert_eq!(update.vlan, Some(10));
    assert_eq!(update.name.as_deref(), Some("vlan=30 phones"));
}

#[tokio::test]
async fn answer_after_a_complete_prefix_is_not_read_as_named() {
    let inv = acme();
    let rec = Recorder::default();

    run(
        &inv,
        &rec,
        "meraki configure-basic-access-port 'Acme Corp' core-sw 2 true 10",
    )
    .await;
    let sent = rec.take();
    let Sent::Dialog {
        group,
        followup,
        fields,
        ..
    } = &sent[0]
    else {
        panic!("expected a dialog, got {:?}", sent[0]);
    };
    assert_eq!(fields.len(), 1);

    let line = format!("{group} {followup} 'vlan=30 phones'");
    let outcome = run(&inv, &rec, &line).await;

    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    let (_, _, update) = inv.updates().pop().unwrap();
    assert_eq!(update.vlan, Some(10));
    assert_eq!(update.name.as_deref(), Some("vlan=30 phones"));
}

#[tokio::test]
async fn configure_access_port_dialog_collects_fields_together() {
    let inv = acme();
    let rec = Recorder::default();

    // Port menu lists the switch's ports with their names.
    run(
        &inv,
        &rec,
        "meraki configure-basic-access-port 'Acme Corp' core-sw",
    )
    .await;
    let sent = rec.take();
    let (followup, title, values) = menu(&sent[0]);
    assert_eq!(title, "Select a Port");
    assert_eq!(values, vec!["1", "2"]);
    match &sent[0] {
        Sent::Menu { choices, .. } => assert_eq!(choices[0].label, "1 (Uplink)"),
        _ => unreachable!(),
    }

    // Port answered: one dialog for enabled, VLAN and description.
    let outcome = run(&inv, &rec, &answer(followup, "2")).await;
    assert_eq!(outcome, Outcome::Incomplete);
    let sent = rec.take();
    assert_eq!(sent.len(), 1);
    let Sent::Dialog {
        group,
        followup,
        title,
        fields,
    } = &sent[0]
    else {
        panic!("expected a dialog, got {:?}", sent[0]);
    };
    assert_eq!(group, "meraki");
    assert_eq!(title, "Port Configuration");
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["enabled", "vlan", "port_desc"]);
    assert!(matches!(&fields[0].input, FieldInput::Select { choices, .. } if choices.len() == 2));
    assert_eq!(
        shlex::split(followup).unwrap(),
        vec![
            "configure-basic-access-port",
            "org_name=Acme Corp",
            "device_name=core-sw",
            "port_number=2",
            "--",
        ]
    );
    assert!(inv.updates().is_empty());
}

#[tokio::test]
async fn invalid_vlan_reprompts_only_that_field() {
    let inv = acme();
    let rec = Recorder::default();

    let outcome = run(
        &inv,
        &rec,
        "meraki configure-basic-access-port 'Acme Corp' core-sw 2 true abc 'To printer'",
    )
    .await;

    assert_eq!(outcome, Outcome::Incomplete);
    assert!(inv.updates().is_empty());
    let sent = rec.take();
    assert_eq!(sent.len(), 2);
    assert!(matches!(&sent[0], Sent::Warning(w) if w.starts_with("VLAN:")));
    let Sent::Dialog {
        group,
        followup,
        fields,
        ..
    } = &sent[1]
    else {
        panic!("expected a dialog, got {:?}", sent[1]);
    };
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["vlan"]);
    let tokens = shlex::split(followup).unwrap();
    assert!(tokens.contains(&"enabled=true".to_owned()));
    assert!(tokens.contains(&"port_desc=To printer".to_owned()));

    // The corrected VLAN completes the command with the kept values.
    let line = format!("{group} {followup} 30");
    let outcome = run(&inv, &rec, &line).await;
    assert_eq!(outcome, Outcome::Finished(CommandStatus::Succeeded));
    let (_, port_id, update) = inv.updates().pop().unwrap();
    assert_eq!(port_id, "2");
    assert_eq!(update.vlan, Some(30));
    assert_eq!(update.name.as_deref(), Some("To printer"));
}
