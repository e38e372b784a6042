use pubxml::core::publishers::builders::{
    build_publish_over, build_thresholds, build_type_configs, build_types, threshold_mode,
    TransportSchema, VIOLATION_SYSTEMS, XUNIT_TYPES,
};
use pubxml::core::publishers::diagnostics::{
    UNKNOWN_THRESHOLD_CATEGORY, UNKNOWN_VIOLATION_SYSTEM, UNKNOWN_XUNIT_TYPE,
};
use pubxml::core::publishers::Diagnostics;
use pubxml::core::xml::{to_fragment, XmlElement};
use pubxml::core::ErrorCategory;
use serde_json::{json, Map, Value};

const SAMPLE_SCHEMA: TransportSchema = TransportSchema {
    console_prefix: "SAMPLE: ",
    plugin_tag: "sample.Plugin",
    publisher_tag: "sample.Publisher",
    transfer_tag: "sample.Transfer",
    reference_tag: "sample.PluginRef",
};

#[test]
fn test_transport_layout() {
    let mut parent = XmlElement::new("publishers");
    build_publish_over(
        "sample",
        &SAMPLE_SCHEMA,
        &json!({"site": "host", "source": "dist/**", "target": "releases"}),
    )
    .unwrap()
    .attach(&mut parent)
    .unwrap();

    insta::assert_snapshot!(to_fragment(&parent, 2).unwrap(), @r###"
    <publishers>
      <sample.Plugin>
        <consolePrefix>SAMPLE: </consolePrefix>
        <delegate>
          <publishers>
            <sample.Publisher>
              <configName>host</configName>
              <verbose>true</verbose>
              <transfers>
                <sample.Transfer>
                  <remoteDirectory>releases</remoteDirectory>
                  <sourceFiles>dist/**</sourceFiles>
                  <excludes/>
                  <removePrefix/>
                  <remoteDirectorySDF>false</remoteDirectorySDF>
                  <flatten>false</flatten>
                  <cleanRemote>false</cleanRemote>
                </sample.Transfer>
              </transfers>
              <useWorkspaceInPromotion>false</useWorkspaceInPromotion>
              <usePromotionTimestamp>false</usePromotionTimestamp>
            </sample.Publisher>
          </publishers>
          <continueOnError>false</continueOnError>
          <failOnError>false</failOnError>
          <alwaysPublishFromMaster>false</alwaysPublishFromMaster>
          <hostConfigurationAccess class="sample.PluginRef" reference="../.."/>
        </delegate>
      </sample.Plugin>
    </publishers>
    "###);
}

#[test]
fn test_transport_extra_transfer_fields_precede_attach() {
    let mut parent = XmlElement::new("publishers");
    let mut nodes = build_publish_over(
        "sample",
        &SAMPLE_SCHEMA,
        &json!({"site": "host", "source": "a", "target": "b", "excludes": "*.log"}),
    )
    .unwrap();
    nodes.transfer_mut().sub_text("extra", "1");
    nodes.attach(&mut parent).unwrap();

    let transfer = parent
        .find_path("sample.Plugin/delegate/publishers/sample.Publisher/transfers/sample.Transfer")
        .unwrap();
    assert_eq!(transfer.child_tags().last(), Some(&"extra"));
    assert_eq!(transfer.text_at("excludes"), Some("*.log"));
}

#[test]
fn test_transport_requires_site_source_and_target() {
    for missing in ["site", "source", "target"] {
        let mut config = json!({"site": "host", "source": "a", "target": "b"});
        config.as_object_mut().unwrap().remove(missing);
        let err = build_publish_over("sample", &SAMPLE_SCHEMA, &config).unwrap_err();
        assert_eq!(err.category, ErrorCategory::MissingField);
        assert!(err.message.contains(missing));
    }
}

#[test]
fn test_xunit_types_every_known_framework() {
    let mut xunit = XmlElement::new("xunit");
    let mut diagnostics = Diagnostics::new();
    let entries: Vec<Value> = XUNIT_TYPES
        .iter()
        .map(|(name, _)| {
            let mut entry = Map::new();
            entry.insert(name.to_string(), json!({"pattern": format!("{}.xml", name)}));
            Value::Object(entry)
        })
        .collect();
    build_types(&mut xunit, "xunit", &entries, &mut diagnostics).unwrap();

    let blocks: Vec<&XmlElement> = xunit.find_all("types").collect();
    assert_eq!(blocks.len(), XUNIT_TYPES.len());
    for (block, (name, tag)) in blocks.iter().zip(XUNIT_TYPES) {
        let framework = block.find(tag).unwrap();
        assert_eq!(framework.text_at("pattern"), Some(format!("{}.xml", name).as_str()));
    }
    assert!(diagnostics.is_empty());
}

#[test]
fn test_xunit_types_warn_on_unknown_and_keep_going() {
    let mut xunit = XmlElement::new("xunit");
    let mut diagnostics = Diagnostics::new();
    build_types(
        &mut xunit,
        "xunit",
        &[json!("gtest"), json!({"nunit": null})],
        &mut diagnostics,
    )
    .unwrap();

    assert_eq!(xunit.child_tags(), vec!["types"]);
    let nunit = xunit.find_path("types/NUnitJunitHudsonTestType").unwrap();
    assert_eq!(nunit.text_at("failIfNotNew"), Some("true"));
    assert_eq!(diagnostics.with_code(UNKNOWN_XUNIT_TYPE).count(), 1);
}

#[test]
fn test_xunit_thresholds() {
    let mut xunit = XmlElement::new("xunit");
    let mut diagnostics = Diagnostics::new();
    build_thresholds(
        &mut xunit,
        "xunit",
        &[
            json!({"failed": {"unstable": 1, "unstableNew": 2, "failure": 3, "failureNew": 4}}),
            json!({"skipped": {"unstable": 5}}),
            json!({"errored": {"unstable": 6}}),
        ],
        &mut diagnostics,
    )
    .unwrap();

    let thresholds = xunit.find("thresholds").unwrap();
    assert_eq!(
        thresholds.child_tags(),
        vec![
            "org.jenkinsci.plugins.xunit.threshold.FailedThreshold",
            "org.jenkinsci.plugins.xunit.threshold.SkippedThreshold",
        ]
    );
    let failed = &thresholds.children()[0];
    assert_eq!(
        failed.child_tags(),
        vec![
            "unstableThreshold",
            "unstableNewThreshold",
            "failureThreshold",
            "failureNewThreshold"
        ]
    );
    assert_eq!(failed.text_at("failureNewThreshold"), Some("4"));
    assert_eq!(diagnostics.with_code(UNKNOWN_THRESHOLD_CATEGORY).count(), 1);
}

#[test]
fn test_xunit_thresholds_always_emitted_and_unknown_name_is_fatal() {
    let mut xunit = XmlElement::new("xunit");
    let mut diagnostics = Diagnostics::new();
    build_thresholds(&mut xunit, "xunit", &[], &mut diagnostics).unwrap();
    assert!(xunit.find("thresholds").unwrap().is_empty());

    let err = build_thresholds(
        &mut XmlElement::new("xunit"),
        "xunit",
        &[json!({"failed": {"broken": 1}})],
        &mut diagnostics,
    )
    .unwrap_err();
    assert_eq!(err.category, ErrorCategory::InvalidValue);
    assert!(err.message.contains("unstable, unstablenew, failure, failurenew"));
}

#[test]
fn test_threshold_mode_encoding() {
    assert_eq!(threshold_mode("xunit", "number").unwrap(), "1");
    assert_eq!(threshold_mode("xunit", "percent").unwrap(), "2");
    let err = threshold_mode("xunit", "Percent").unwrap_err();
    assert_eq!(err.category, ErrorCategory::InvalidValue);
}

#[test]
fn test_violation_type_configs() {
    let mut parent = XmlElement::new("config");
    let mut diagnostics = Diagnostics::new();
    build_type_configs(
        &mut parent,
        "violations",
        &json!({"pylint": {"unstable": 5}, "eslint": {"min": 1}}),
        &mut diagnostics,
    )
    .unwrap();

    let configs = parent.find("typeConfigs").unwrap();
    assert_eq!(configs.child_tags()[0], "no-comparator");
    let names: Vec<&str> = configs
        .find_all("entry")
        .filter_map(|entry| entry.text_at("string"))
        .collect();
    assert_eq!(names, VIOLATION_SYSTEMS.to_vec());

    let pylint = configs
        .find_all("entry")
        .find(|entry| entry.text_at("string") == Some("pylint"))
        .unwrap();
    assert_eq!(
        pylint.text_at("hudson.plugins.violations.TypeConfig/unstable"),
        Some("5")
    );
    assert_eq!(diagnostics.with_code(UNKNOWN_VIOLATION_SYSTEM).count(), 1);
}

#[test]
fn test_violation_type_configs_reject_lists() {
    let mut parent = XmlElement::new("config");
    let mut diagnostics = Diagnostics::new();
    let err = build_type_configs(&mut parent, "violations", &json!(["pep8"]), &mut diagnostics)
        .unwrap_err();
    assert_eq!(err.category, ErrorCategory::InvalidShape);
}
