use wordcloud_vibes::pipeline::run;
use wordcloud_vibes::render::*;
use wordcloud_vibes::theme::ThemeId;

#[test]
fn test_weight_to_size_is_square_root() {
    assert_eq!(weight_to_size(1), 10.0);
    assert_eq!(weight_to_size(4), 20.0);
    assert_eq!(weight_to_size(9), 30.0);
}

#[test]
fn test_cloud_spec_defaults() {
    let output = run("ghost ghost ghost ghost castle").unwrap();
    let cloud = CloudSpec::from_output(&output);

    assert_eq!(cloud.grid_size, 18);
    assert_eq!(cloud.rotate_ratio, 0.5);
    assert_eq!(cloud.rotation_steps, 2);
    assert_eq!(cloud.weight_factor, 10.0);
    assert_eq!((cloud.width, cloud.height), (800, 600));

    assert_eq!(cloud.list.len(), 2);
    assert_eq!(cloud.list[0].text, "ghost");
    assert_eq!(cloud.list[0].weight, 4);
    assert_eq!(cloud.list[0].size, 20.0);
    assert_eq!(cloud.font_family, "'Creepster', cursive");
}

#[test]
fn test_page_and_cloud_share_theme() {
    let rendering = Rendering::new(run("a bright sunny day").unwrap());
    assert_eq!(rendering.page.font_family, rendering.cloud.font_family);
    assert_eq!(rendering.page.color, rendering.cloud.color);
    assert_eq!(rendering.page.background_color, rendering.cloud.background_color);
    assert_eq!(rendering.page.background_color, "#ffffff");
}

#[test]
fn test_page_style_for_theme() {
    let page = PageStyle::for_theme(ThemeId::Haunted).unwrap();
    assert_eq!(page.background_color, "#2e2e2e");
    assert_eq!(page.color, "rgba(150, 0, 0, 0.8)");
}

#[test]
fn test_rendering_json_shape() {
    let json = serde_json::to_value(Rendering::new(run("The ghost wandered.").unwrap())).unwrap();
    assert_eq!(json["output"]["themeId"], "haunted");
    assert_eq!(json["output"]["rankedList"][0]["word"], "ghost");
    assert_eq!(json["cloud"]["gridSize"], 18);
    assert_eq!(json["cloud"]["rotateRatio"], 0.5);
    assert_eq!(json["page"]["fontFamily"], "'Creepster', cursive");
}
