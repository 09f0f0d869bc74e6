use super::*;

#[test]
fn empty_roster_renders_empty_container() {
    let view = render(&Roster::init());
    assert!(view.is_empty());
    assert!(view.actions().is_empty());
}

#[test]
fn new_team_renders_heading_header_and_form_only() {
    let mut roster = Roster::init();
    roster.create_team("Alpha");

    let view = render(&roster);
    assert_eq!(view.teams.len(), 1);

    let team = &view.teams[0];
    assert_eq!(team.team_id, TeamId(0));
    assert_eq!(team.heading.title, "Alpha");
    assert_eq!(team.heading.delete.label, "Delete Team");
    assert_eq!(team.heading.delete.action, UiAction::DeleteTeam(TeamId(0)));
    assert_eq!(team.table.columns, ["Name", "Position"]);
    assert_eq!(team.table.form.create.label, "Create");
    assert_eq!(team.table.form.create.action, UiAction::CreateMember(TeamId(0)));
    assert!(team.table.rows.is_empty());
}

#[test]
fn member_renders_one_row_with_delete_control() {
    let mut roster = Roster::init();
    let team_id = roster.create_team("Alpha").id();
    let member_id = roster.add_member(team_id, "Ann", "Dev").expect("ann").id();

    let view = render(&roster);
    let rows = &view.team(team_id).expect("alpha").table.rows;
    assert_eq!(
        rows,
        &vec![MemberRow {
            member_id,
            name: "Ann".to_string(),
            position: "Dev".to_string(),
            delete: Button {
                label: "Delete",
                action: UiAction::DeleteMember(team_id, member_id),
            },
        }]
    );
}

#[test]
fn teams_render_in_creation_order() {
    let mut roster = Roster::init();
    roster.create_team("Alpha");
    roster.create_team("Beta");

    let view = render(&roster);
    let titles: Vec<(TeamId, &str)> = view
        .teams
        .iter()
        .map(|team| (team.team_id, team.heading.title.as_str()))
        .collect();
    assert_eq!(titles, vec![(TeamId(0), "Alpha"), (TeamId(1), "Beta")]);
}

#[test]
fn members_render_in_list_order() {
    let mut roster = Roster::init();
    let team_id = roster.create_team("Alpha").id();
    for (name, position) in [("Ann", "Dev"), ("Bob", "QA"), ("Cid", "Ops")] {
        roster.add_member(team_id, name, position).expect("add");
    }

    let view = render(&roster);
    let names: Vec<&str> = view.teams[0]
        .table
        .rows
        .iter()
        .map(|row| row.name.as_str())
        .collect();
    assert_eq!(names, vec!["Ann", "Bob", "Cid"]);
}

#[test]
fn render_is_idempotent() {
    let mut roster = Roster::init();
    let alpha = roster.create_team("Alpha").id();
    roster.create_team("Beta");
    roster.add_member(alpha, "Ann", "Dev").expect("ann");

    assert_eq!(render(&roster), render(&roster));
}

#[test]
fn deleted_team_and_its_members_are_not_rendered() {
    let mut roster = Roster::init();
    let alpha = roster.create_team("Alpha").id();
    let beta = roster.create_team("Beta").id();
    let ann = roster.add_member(alpha, "Ann", "Dev").expect("ann").id();
    roster.add_member(beta, "Bob", "QA").expect("bob");

    roster.delete_team(alpha).expect("alpha is live");
    let view = render(&roster);

    assert!(view.team(alpha).is_none());
    assert!(view
        .teams
        .iter()
        .flat_map(|team| team.table.rows.iter())
        .all(|row| row.member_id != ann));
    let alpha_controls = [UiAction::DeleteTeam(alpha), UiAction::CreateMember(alpha)];
    assert!(!view
        .actions()
        .iter()
        .any(|action| alpha_controls.contains(action)));
}

#[test]
fn input_ids_embed_the_team_id() {
    assert_eq!(InputId::NewTeamName.to_string(), "new-team-name");
    assert_eq!(InputId::MemberName(TeamId(3)).to_string(), "name-input-3");
    assert_eq!(
        InputId::MemberPosition(TeamId(12)).to_string(),
        "position-input-12"
    );
    assert_eq!(InputId::MemberName(TeamId(3)).team_id(), Some(TeamId(3)));
    assert_eq!(InputId::NewTeamName.team_id(), None);
}

#[test]
fn input_ids_never_collide_across_teams() {
    let mut roster = Roster::init();
    for name in ["Alpha", "Beta", "Gamma"] {
        roster.create_team(name);
    }

    let view = render(&roster);
    let ids: Vec<String> = view.inputs().map(|id| id.to_string()).collect();
    let unique: std::collections::HashSet<&String> = ids.iter().collect();
    assert_eq!(ids.len(), 6);
    assert_eq!(unique.len(), ids.len());
}
