use geojson_core::json::JsonValue;
use geojson_geometry::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn feature_example() -> GeoFeature {
	let mut feature = GeoFeature::new(Geometry::new_line_string(vec![[13.0, 52.0], [13.5, 52.25]]));
	feature.set_id("road-7");
	feature.set_property(String::from("name"), "Unter den Linden");
	feature.set_property(String::from("lanes"), 4);
	feature
}

#[rstest]
#[case(r#"{"type":"Point","coordinates":[1,2]}"#, true)]
#[case(r#"{"type":"MultiPoint","coordinates":[[1,2],[3,4]]}"#, true)]
#[case(r#"{"type":"LineString","coordinates":[[1,2],[3,4]]}"#, true)]
#[case(r#"{"type":"MultiLineString","coordinates":[[[1,2],[3,4]]]}"#, true)]
#[case(r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}"#, true)]
#[case(r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[1,0],[1,1],[0,0]]]]}"#, true)]
#[case(r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[1,2]}]}"#, true)]
#[case(r#"{"type":"Feature","geometry":null,"properties":null}"#, false)]
#[case(r#"{"type":"FeatureCollection","features":[]}"#, false)]
fn is_geometry_per_variant(#[case] text: &str, #[case] is_geometry: bool) {
	let geojson = GeoJson::parse_str(text);
	assert!(geojson.error().is_none(), "{:?}", geojson.error());
	assert_eq!(geojson.is_geometry(), is_geometry);
	assert_eq!(geojson.geojson_type().unwrap().is_geometry(), is_geometry);
}

#[rstest]
#[case(GeoJson::from(PointGeometry::from([13.4, 52.5, 34.0])))]
#[case(GeoJson::from(MultiPointGeometry::from(vec![[1.0, 2.0], [3.0, 4.0]])))]
#[case(GeoJson::from(Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 0.5], [2.0, 0.25]])))]
#[case(GeoJson::from(Geometry::new_multi_line_string(vec![vec![[0.0, 0.0], [1.0, 1.0]], vec![[1.0, 1.0], [0.0, 0.0]]])))]
#[case(GeoJson::from(Geometry::new_polygon(vec![vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 0.0]]])))]
#[case(GeoJson::from(Geometry::new_multi_polygon(vec![vec![vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 0.0]]]])))]
#[case(GeoJson::from(GeometryCollection::from(vec![
	Geometry::new_point([1.0, 2.0]),
	Geometry::from(GeometryCollection::new()),
])))]
#[case(GeoJson::from(feature_example()))]
#[case(GeoJson::from(GeoCollection::from(vec![feature_example(), GeoFeature::default()])))]
fn decode_of_encode_is_identity(#[case] original: GeoJson) {
	let text = original.to_string();
	let decoded = GeoJson::parse_str(&text);
	assert_eq!(decoded, original, "{text}");
}

#[rstest]
#[case(GeoJson::from(MultiPointGeometry::new()))]
#[case(GeoJson::from(MultiLineStringGeometry::new()))]
#[case(GeoJson::from(MultiPolygonGeometry::new()))]
#[case(GeoJson::from(GeometryCollection::new()))]
#[case(GeoJson::from(GeoCollection::new()))]
fn empty_containers_encode_to_empty_arrays(#[case] geojson: GeoJson) {
	let object = geojson.object().unwrap();
	assert_eq!(object.encode().stringify(), "[]");
	let json = geojson.to_json();
	assert_eq!(json.as_object().unwrap().get(object.prefix()), Some(&JsonValue::new_array()));
}

#[rstest]
#[case("")]
#[case("not json")]
#[case(r#"{"type":"Point","coordinates":[1,2]"#)]
#[case("[1,2,]")]
fn text_that_is_not_json(#[case] text: &str) {
	let geojson = GeoJson::parse_str(text);
	let error = geojson.error().unwrap();
	assert_eq!(error.domain(), GEOJSON_ERROR_DOMAIN);
	assert_eq!(error.code(), ErrorCode::InvalidJson);
	assert_eq!(error.code().as_i32(), 998);
}

#[rstest]
#[case(r#"{"type":"LineString","coordinates":[[1,2]]}"#)]
#[case(r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1]]]}"#)]
#[case(r#"{"type":"Point","coordinates":[1]}"#)]
#[case(r#"{"type":"Point","coordinates":[1,2,3,4]}"#)]
#[case(r#"{"type":"Point","coordinates":["1","2"]}"#)]
#[case(r#"{"type":"Feature","geometry":{"type":"Point"},"properties":null}"#)]
#[case(r#"{"type":"Feature","geometry":null,"properties":[]}"#)]
#[case(r#"{"type":"Feature","geometry":null,"id":true}"#)]
#[case(r#"{"type":"FeatureCollection","features":[{"type":"Point","coordinates":[1,2]}]}"#)]
#[case(r#"{"type":"GeometryCollection","geometries":[{"type":"Feature","geometry":null}]}"#)]
#[case(r#"{"type":"Topology","coordinates":[]}"#)]
#[case(r#"{"type":"Point","coordinates":[0,0],"bbox":[1e400,0,1,1]}"#)]
#[case(r#"{"type":"Feature","geometry":null,"properties":null,"id":1e400}"#)]
fn invalid_objects_share_one_code(#[case] text: &str) {
	let geojson = GeoJson::parse_str(text);
	assert_eq!(geojson.error().unwrap().code(), ErrorCode::InvalidGeoJsonObject);
	assert!(geojson.object().is_none());
}

#[test]
fn nested_failure_names_its_location() {
	let geojson = GeoJson::parse_str(
		r#"{"type":"FeatureCollection","features":[
			{"type":"Feature","geometry":null,"properties":null},
			{"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0]]},"properties":null}
		]}"#,
	);
	assert_eq!(
		geojson.error().unwrap().to_string(),
		"invalid GeoJSON object: in 'features': at index 1: in 'geometry': in 'coordinates': a line string must have at least 2 positions, found 1"
	);
}

#[test]
fn bbox_and_crs_pass_through() {
	let text = r#"{"type":"Feature","bbox":[0,0,10,10],"crs":{"properties":{"name":"urn:ogc:def:crs:OGC:1.3:CRS84"},"type":"name"},"geometry":null,"properties":null}"#;
	let geojson = GeoJson::parse_str(text);
	assert_eq!(geojson.bbox(), Some([0.0, 0.0, 10.0, 10.0].as_slice()));
	assert_eq!(geojson.crs().unwrap().as_object().unwrap().get_str("type").unwrap(), Some("name"));

	let reencoded = GeoJson::parse_str(&geojson.to_string());
	assert_eq!(reencoded, geojson);
}

#[test]
fn large_and_small_numbers_use_exponent_form() {
	let geojson = GeoJson::from(PointGeometry::from([1e300, 1.5e-8]));
	let text = geojson.to_string();
	assert_eq!(text, r#"{"coordinates":[1e300,1.5e-8],"type":"Point"}"#);
	assert_eq!(GeoJson::parse_str(&text), geojson);
}

#[test]
fn precision_applies_to_nested_geometries() {
	let collection = GeoCollection::from(vec![GeoFeature::new(PointGeometry::from([1.234_567, 7.654_321]))]);
	let config = GeoJsonConfig::default().with_precision(3);
	let text = GeoJson::from(collection).to_json_with_config(&config).stringify();
	assert!(text.contains(r#""coordinates":[1.235,7.654]"#), "{text}");
}

#[test]
fn max_depth_limits_nesting() {
	let text = r#"{"type":"GeometryCollection","geometries":[{"type":"GeometryCollection","geometries":[]}]}"#;
	assert!(GeoJson::parse_str(text).error().is_none());

	let config = GeoJsonConfig::default().with_max_depth(0);
	let geojson = GeoJson::parse_str_with_config(text, &config);
	assert_eq!(geojson.error().unwrap().code(), ErrorCode::InvalidGeoJsonObject);
}

#[test]
fn geo_types_interop() {
	let geojson = GeoJson::parse_str(r#"{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[0,0]]]}"#);
	let polygon = geo::Polygon::from(geojson.polygon().unwrap());
	assert_eq!(polygon.exterior().0.len(), 4);
	assert_eq!(PolygonGeometry::from(polygon), *geojson.polygon().unwrap());
}
