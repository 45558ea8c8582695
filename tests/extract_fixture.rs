// tests/extract_fixture.rs
//
// Extractor against a captured listing page.
//
use criterion_pls::specs::films;

const FIXTURE: &str = include_str!("fixtures/listing.html");
const ROWS: usize = 4;

#[test]
fn six_columns_of_equal_length() {
    let table = films::extract(FIXTURE);
    assert_eq!(table.len(), ROWS);
    assert_eq!(table.titles().len(), ROWS);
    assert_eq!(table.directors().len(), ROWS);
    assert_eq!(table.countries().len(), ROWS);
    assert_eq!(table.years().len(), ROWS);
    assert_eq!(table.urls().len(), ROWS);
    assert_eq!(table.images().len(), ROWS);
}

#[test]
fn positions_describe_the_same_row() {
    let table = films::extract(FIXTURE);

    let stalker = table.get(1).unwrap();
    assert_eq!(stalker.title, Some("Stalker"));
    assert_eq!(stalker.director, Some("Andrei Tarkovsky"));
    assert_eq!(stalker.year, Some("1979"));
    assert_eq!(stalker.url, Some("https://www.criterionchannel.com/stalker"));
    assert!(stalker.image.unwrap().starts_with("https://vhx.imgix.net/stalker.jpg"));

    // Row with an empty image cell and a blank director
    let m = table.get(2).unwrap();
    assert_eq!(m.title, Some("M"));
    assert_eq!(m.director, None);
    assert_eq!(m.image, None);
    assert_eq!(m.country, Some("Germany,"));

    // The gap above does not shift the next row
    let cleo = table.get(3).unwrap();
    assert_eq!(cleo.title, Some("Cléo from 5 to 7"));
    assert_eq!(cleo.director, Some("Agnès Varda"));
    assert_eq!(cleo.url, Some("https://www.criterionchannel.com/cleo-from-5-to-7"));
}

#[test]
fn header_row_is_not_a_film() {
    let table = films::extract(FIXTURE);
    assert!(table.find_title("Title").is_none());
}

#[test]
fn display_helpers_on_scraped_rows() {
    let table = films::extract(FIXTURE);
    let tokyo = table.get(0).unwrap();
    assert_eq!(tokyo.headline(), "Tokyo Story (1953)");
    assert_eq!(tokyo.byline(), "Yasujiro Ozu — Japan");

    // Entities are decoded by the parser before the query is swapped
    let poster = tokyo.poster().unwrap();
    assert_eq!(
        poster,
        "https://vhx.imgix.net/tokyo-story.jpg?auto=format%2Ccompress&fit=crop&h=720&q=75&w=1280"
    );

    assert_eq!(table.get(2).unwrap().byline(), "Germany");
}
