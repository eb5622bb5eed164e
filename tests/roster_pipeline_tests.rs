use mlb_rosters::{
    config::Config,
    constants::jersey,
    data_fetcher::markup::{RosterSchema, SchemaVersion, UsageReportSchema},
    data_fetcher::{HttpFetcher, RosterCache, RosterService},
    error::AppError,
    format::{TextLayout, pitchers_block, position_players_block},
};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn current_row(number: &str, name: &str, bat_throw: &str, id: &str) -> String {
    format!(
        r#"<tr>
             <td class="info"><span class="jersey">{number}</span>
               <a href="/player/{id}">{name}</a></td>
             <td class="position">P</td>
             <td class="bat-throw">{bat_throw}</td>
           </tr>"#
    )
}

fn current_page(groups: &[Vec<String>]) -> String {
    let tables: String = groups
        .iter()
        .map(|rows| {
            format!(
                r#"<table class="roster__table">
                     <thead><tr><th>Player</th><th>Pos</th><th>B/T</th></tr></thead>
                     <tbody>{}</tbody>
                   </table>"#,
                rows.concat()
            )
        })
        .collect();
    format!("<html><body><main>{tables}</main></body></html>")
}

fn reds_page() -> String {
    current_page(&[
        vec![
            current_row("", "Jane Doe", "L/R", "55"),
            current_row("47", "Closer Guy", "L/L", "321"),
            current_row("22", "Ace Starter", "R/R", "100"),
            current_row("", "Late Signing", "R/R", "900"),
        ],
        vec![current_row("29", "Tucker Barnhart", "S/R", "200")],
        vec![
            current_row("19", "Joey Votto", "L/R", "201"),
            current_row("\u{2014}", "Call Up", "R/R", "202"),
        ],
    ])
}

const USAGE_REPORT: &str = r#"
    <html><body>
      <table>
        <tr><td><a class="usage-link" href="https://stats.example.com/bullpen/usage-321.html">Closer Guy</a></td></tr>
        <tr><td><a class="usage-link" href="https://stats.example.com/bullpen/usage-badformat">Mystery</a></td></tr>
        <tr><td><a href="https://stats.example.com/bullpen/usage-100.html">Not a usage link</a></td></tr>
      </table>
    </body></html>
"#;

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn fetcher() -> HttpFetcher {
    HttpFetcher::with_timeout(5)
        .unwrap()
        .max_retries(1)
        .base_backoff(Duration::from_millis(5))
}

fn current_schema() -> RosterSchema {
    RosterSchema::for_version(SchemaVersion::Current).unwrap()
}

/// Full pipeline over HTTP: extraction, sorting, bullpen split and rendering
#[tokio::test]
async fn test_roster_with_bullpen_over_http() {
    let server = MockServer::start().await;
    mount_page(&server, "/cin/roster", reds_page()).await;
    mount_page(&server, "/bullpen.html", USAGE_REPORT.to_string()).await;

    let service = RosterService::new(
        fetcher(),
        current_schema(),
        format!("{}/{{team}}/roster", server.uri()),
    )
    .with_bullpen_report(
        format!("{}/bullpen.html", server.uri()),
        UsageReportSchema::default_report().unwrap(),
    );

    let roster = service.get_roster("CIN").await.unwrap();

    let pitcher_numbers: Vec<u16> = roster.pitchers().iter().map(|p| p.number).collect();
    assert_eq!(pitcher_numbers, vec![22, 47, jersey::ABSENT, jersey::ABSENT]);
    // Equal sentinels keep their row order
    assert_eq!(roster.pitchers()[2].name, "Jane Doe");
    assert_eq!(roster.pitchers()[3].name, "Late Signing");

    assert_eq!(roster.bullpen().len(), 1);
    assert_eq!(roster.bullpen()[0].name, "Closer Guy");
    assert_eq!(roster.starters().len(), 3);

    assert_eq!(
        pitchers_block(&roster, &TextLayout::PLAIN),
        "22 Ace Starter R\n100 Jane Doe R\n100 Late Signing R\n\n47 Closer Guy L"
    );
    assert_eq!(
        position_players_block(&roster, &TextLayout::LATEX),
        r"\noindent19 Joey Votto L\\29 Tucker Barnhart S\\66 Call Up R"
    );
}

#[tokio::test]
async fn test_identifier_comes_from_trailing_path_segment() {
    let server = MockServer::start().await;
    let page = current_page(&[vec![
        r#"<tr><td class="info"><span class="jersey">12</span><a href="/players/55">Jane Doe</a></td><td class="bat-throw">L/R</td></tr>"#
            .to_string(),
    ]]);
    mount_page(&server, "/was/roster", page).await;

    let service = RosterService::new(
        fetcher(),
        current_schema(),
        format!("{}/{{team}}/roster", server.uri()),
    );
    let roster = service.build_roster("was").await.unwrap();

    let jane = &roster.pitchers()[0];
    assert_eq!(jane.number, 12);
    assert_eq!(jane.name, "Jane Doe");
    assert_eq!(jane.bats.map(|h| h.code()), Some("L"));
    assert_eq!(jane.throws.map(|h| h.code()), Some("R"));
    assert_eq!(jane.identifier.as_ref().map(|id| id.as_str()), Some("55"));
    assert!(roster.position_players().is_empty());
}

#[tokio::test]
async fn test_unreachable_bullpen_report_leaves_roster_usable() {
    let server = MockServer::start().await;
    mount_page(&server, "/cin/roster", reds_page()).await;
    Mock::given(method("GET"))
        .and(path("/bullpen.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let service = RosterService::new(
        fetcher(),
        current_schema(),
        format!("{}/{{team}}/roster", server.uri()),
    )
    .with_bullpen_report(
        format!("{}/bullpen.html", server.uri()),
        UsageReportSchema::default_report().unwrap(),
    );

    let roster = service.get_roster("cin").await.unwrap();
    assert_eq!(roster.pitchers().len(), 4);
    assert!(roster.starters().is_empty());
    assert!(roster.bullpen().is_empty());
    assert_eq!(
        pitchers_block(&roster, &TextLayout::PLAIN).lines().count(),
        4
    );
}

#[tokio::test]
async fn test_changed_page_layout_is_a_schema_error() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/cin/roster",
        "<html><body><div class=\"roster-grid\">New layout</div></body></html>".to_string(),
    )
    .await;

    let service = RosterService::new(
        fetcher(),
        current_schema(),
        format!("{}/{{team}}/roster", server.uri()),
    );
    let err = service.get_roster("cin").await.unwrap_err();
    assert!(matches!(err, AppError::SchemaNotFound { .. }));
    assert!(err.to_string().contains("table.roster__table"));
}

#[tokio::test]
async fn test_missing_team_page_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let service = RosterService::new(
        fetcher(),
        current_schema(),
        format!("{}/{{team}}/roster", server.uri()),
    );
    let err = service.get_roster("xyz").await.unwrap_err();
    assert!(err.is_fetch_error());
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_legacy_layout_from_config() {
    let server = MockServer::start().await;
    let page = r#"
        <html><body>
        <table class="team_table_results">
          <tbody>
            <tr><td>34</td><td><a href="/team/player.jsp?player_id=1001">Homer Bailey</a></td><td>R-R</td></tr>
            <tr><td>99</td><td><a href="/team/player.jsp?player_id=1003">Injured Arm</a> &#042;</td><td>R-R</td></tr>
            <tr><td>27</td><td><a href="/team/player.jsp?player_id=1002">Johnny Cueto</a></td><td>R-R</td></tr>
          </tbody>
          <tbody>
            <tr><td>19</td><td><a href="/team/player.jsp?player_id=2001">Joey Votto</a></td><td>L-R</td></tr>
          </tbody>
          <tbody>
            <tr><td>7</td><td><a href="/team/player.jsp?player_id=2002">Eugenio Suarez</a></td><td>R-R</td></tr>
          </tbody>
        </table>
        </body></html>
    "#;
    mount_page(&server, "/roster_active.jsp", page.to_string()).await;

    let config = Config {
        roster_url: format!("{}/roster_active.jsp?c_id={{team}}", server.uri()),
        schema_version: SchemaVersion::Legacy,
        ..Config::default()
    };
    assert!(config.validate().is_ok());

    let service = RosterService::from_config(&config, fetcher()).unwrap();
    let roster = service.get_roster("cin").await.unwrap();

    let pitchers: Vec<&str> = roster.pitchers().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(pitchers, vec!["Johnny Cueto", "Homer Bailey"]);
    let position_players: Vec<&str> = roster
        .position_players()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(position_players, vec!["Eugenio Suarez", "Joey Votto"]);
    assert_eq!(
        roster.pitchers()[1]
            .identifier
            .as_ref()
            .map(|id| id.as_str()),
        Some("1001")
    );
}

#[tokio::test]
async fn test_cache_shares_roster_between_concurrent_callers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cin/roster"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(reds_page())
                .set_delay(Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = Arc::new(
        RosterService::new(
            fetcher(),
            current_schema(),
            format!("{}/{{team}}/roster", server.uri()),
        )
        .with_cache(Arc::new(RosterCache::with_capacity(4).unwrap())),
    );

    let mut handles = Vec::new();
    for team in ["cin", "CIN", " cin ", "cin"] {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move { service.get_roster(team).await }));
    }

    let mut rosters = Vec::new();
    for handle in handles {
        rosters.push(handle.await.unwrap().unwrap());
    }
    assert!(rosters.iter().all(|r| Arc::ptr_eq(r, &rosters[0])));
}
