use cinema_models::utils::validation::Validate;
use cinema_models::{LocalStorage, RenderConfig, RenderEngine};
use serde_json::json;
use tempfile::TempDir;

fn cinema_export() -> serde_json::Value {
    json!({
        "jcr:primaryType": "cq:Page",
        "jcr:content": {
            "jcr:title": "Topázio Cinemas",
            "root": {
                "navbar": {
                    "sling:resourceType": "aem-cinema-react/components/customnavbar",
                    "url": "/content/aem-cinema-react/us/en",
                    "topazPlusUrl": "https://plus.example.com",
                    "accessibilityUrl": "/content/aem-cinema-react/us/en/accessibility.html",
                    "faqUrl": "/content/aem-cinema-react/us/en/faq.html"
                },
                "carousel": {
                    "sling:resourceType": "aem-cinema-react/components/carousel",
                    "contentType": "movies",
                    "slideAssets": {
                        "item0": {
                            "fileReference": "/content/dam/cinema/banner.jpg",
                            "title": "Premiere week",
                            "buttonName": "See schedule",
                            "internalLink": "/content/aem-cinema-react/us/en/schedule"
                        },
                        "item1": { "jcr:primaryType": "nt:unstructured" }
                    },
                    "movieAssets": {
                        "item0": { "fragmentPath": "/content/aem-cinema-react/us/en/dam/dune" },
                        "item1": { "fragmentPath": "/content/aem-cinema-react/us/en/dam/deleted" }
                    }
                },
                "highlight": {
                    "sling:resourceType": "aem-cinema-react/components/highlight",
                    "title": "Combo",
                    "alignment": "right",
                    "internalLink": "/content/aem-cinema-react/us/en/snacks.html"
                }
            }
        },
        "schedule": { "jcr:content": { "jcr:title": "Schedule" } },
        "snacks": { "jcr:content": { "jcr:title": "Snacks", "cq:hideInNav": true } },
        "christmas": {
            "jcr:content": {
                "jcr:title": "Christmas",
                "onTime": "2024-12-01T00:00:00Z",
                "offTime": "2024-12-31T23:59:59Z"
            }
        },
        "faq": { "jcr:content": { "jcr:title": "FAQ" } },
        "dam": {
            "dune": {
                "jcr:content": {
                    "data": {
                        "poster": "/content/dam/cinema/dune.jpg",
                        "title": "Dune: Part Two",
                        "ageGroup": "14",
                        "gender": "Sci-Fi",
                        "movieTime": "20:15"
                    }
                }
            }
        }
    })
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("cinema.json"),
            serde_json::to_vec_pretty(&cinema_export()).unwrap(),
        )
        .unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_str().unwrap().replace('\\', "/")
    }

    fn config(&self, evaluation_time: &str) -> RenderConfig {
        let toml_content = format!(
            r#"
[store]
content_file = "{}"
mount_path = "/content/aem-cinema-react/us/en"

[render]
components = [
    "/content/aem-cinema-react/us/en/jcr:content/root/navbar",
    "/content/aem-cinema-react/us/en/jcr:content/root/carousel",
    "/content/aem-cinema-react/us/en/jcr:content/root/highlight",
]
output_path = "{}"
evaluation_time = "{}"
"#,
            self.path("cinema.json"),
            self.path("rendered"),
            evaluation_time
        );
        RenderConfig::from_toml_str(&toml_content).unwrap()
    }

    fn read_output(&self, name: &str) -> serde_json::Value {
        let data = std::fs::read(self.dir.path().join("rendered").join(name)).unwrap();
        serde_json::from_slice(&data).unwrap()
    }
}

fn render(fixture: &Fixture, evaluation_time: &str) -> Vec<String> {
    let config = fixture.config(evaluation_time);
    config.validate().unwrap();
    let storage = LocalStorage::new(fixture.path("rendered"));
    RenderEngine::new(storage, config).run().unwrap()
}

#[test]
fn test_end_to_end_render_writes_all_components() {
    let fixture = Fixture::new();
    let outputs = render(&fixture, "2024-06-01T12:00:00Z");

    assert_eq!(outputs.len(), 3);
    assert!(outputs[0].ends_with(
        "content_aem-cinema-react_us_en_jcr_content_root_navbar.model.json"
    ));
}

#[test]
fn test_navbar_output() {
    let fixture = Fixture::new();
    render(&fixture, "2024-06-01T12:00:00Z");

    let navbar =
        fixture.read_output("content_aem-cinema-react_us_en_jcr_content_root_navbar.model.json");

    assert_eq!(navbar[":type"], "aem-cinema-react/components/customnavbar");
    assert_eq!(navbar["url"], "/content/aem-cinema-react/us/en");
    assert_eq!(navbar["topazPlusUrl"], "https://plus.example.com");

    // snacks is hidden, christmas is outside its window and dam has no content node
    let titles: Vec<&str> = navbar["navbarPages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|page| page["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Schedule", "FAQ"]);
    assert_eq!(
        navbar["navbarPages"][0]["path"],
        "/content/aem-cinema-react/us/en/schedule"
    );
}

#[test]
fn test_navbar_window_opens_at_evaluation_time() {
    let fixture = Fixture::new();
    render(&fixture, "2024-12-24T18:00:00Z");

    let navbar =
        fixture.read_output("content_aem-cinema-react_us_en_jcr_content_root_navbar.model.json");
    let titles: Vec<&str> = navbar["navbarPages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|page| page["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Schedule", "Christmas", "FAQ"]);
}

#[test]
fn test_carousel_output() {
    let fixture = Fixture::new();
    render(&fixture, "2024-06-01T12:00:00Z");

    let carousel =
        fixture.read_output("content_aem-cinema-react_us_en_jcr_content_root_carousel.model.json");

    assert_eq!(carousel["contentType"], "movies");
    assert_eq!(
        carousel["slides"],
        json!([{
            "fileReference": "/content/dam/cinema/banner.jpg",
            "title": "Premiere week",
            "buttonName": "See schedule",
            "internalLink": "/content/aem-cinema-react/us/en/schedule.html",
            "link": "/content/aem-cinema-react/us/en/schedule.html",
            "isInternal": true
        }, {
            "isInternal": false
        }])
    );
    assert_eq!(
        carousel["movies"],
        json!([
            {
                "poster": "/content/dam/cinema/dune.jpg",
                "title": "Dune: Part Two",
                "ageGroup": "14",
                "gender": "Sci-Fi",
                "movieTime": "20:15",
                "fragmentPath": "/content/aem-cinema-react/us/en/dam/dune"
            },
            { "fragmentPath": "/content/aem-cinema-react/us/en/dam/deleted" }
        ])
    );

    let id = carousel["id"].as_str().unwrap();
    assert!(id.starts_with("carousel-"));
    assert_eq!(carousel["dataLayer"][id]["id"], id);
}

#[test]
fn test_highlight_output() {
    let fixture = Fixture::new();
    render(&fixture, "2024-06-01T12:00:00Z");

    let highlight =
        fixture.read_output("content_aem-cinema-react_us_en_jcr_content_root_highlight.model.json");
    assert_eq!(
        highlight,
        json!({
            "title": "Combo",
            "alignment": "right",
            "internalLink": "/content/aem-cinema-react/us/en/snacks.html",
            "link": "/content/aem-cinema-react/us/en/snacks.html",
            ":type": "aem-cinema-react/components/highlight"
        })
    );
}

#[test]
fn test_rendering_is_repeatable() {
    let fixture = Fixture::new();
    render(&fixture, "2024-06-01T12:00:00Z");
    let first =
        fixture.read_output("content_aem-cinema-react_us_en_jcr_content_root_carousel.model.json");
    render(&fixture, "2024-06-01T12:00:00Z");
    let second =
        fixture.read_output("content_aem-cinema-react_us_en_jcr_content_root_carousel.model.json");
    assert_eq!(first, second);
}
