use backend::rest::RestDataSource;
use model::{Reservation, Station};
use screen::{MapScreen, Screen};

#[tokio::main]
async fn main() {
    env_logger::init();

    let base_url = std::env::var("API_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:8080/api/v1".to_owned());
    log::info!("using api at {}", base_url);

    // station table
    let stations: RestDataSource<Station> = RestDataSource::new(&base_url);
    let mut screen = Screen::new(stations.clone());
    if screen.load().await {
        let page = screen.page();
        println!(
            "page {} of {} stations:",
            page.page_index,
            page.total
        );
        let json = serde_json::to_string_pretty(&page.items).unwrap();
        println!("{}", json);
    }

    // map markers
    let reservations: RestDataSource<Reservation> = RestDataSource::new(&base_url);
    let mut map = MapScreen::new(stations, reservations);
    if map.load().await {
        for marker in map.markers().values() {
            println!("marker: {}", marker.popup_text().replace('\n', " | "));
        }
    }
}
