use pubxml::core::publishers::{compile_publishers, Action, Diagnostics, PublisherRegistry};
use pubxml::core::xml::{to_fragment, XmlElement};
use pubxml::core::ErrorCategory;
use serde_json::{json, Value};

fn compile_one(name: &str, config: Value) -> (XmlElement, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let publishers = compile_publishers(
        PublisherRegistry::global(),
        &[Action::new(name, config)],
        &mut diagnostics,
    )
    .unwrap();
    (publishers, diagnostics)
}

fn render(name: &str, config: Value) -> String {
    let (publishers, _) = compile_one(name, config);
    to_fragment(&publishers, 2).unwrap()
}

fn plugin(name: &str, config: Value) -> XmlElement {
    let (publishers, _) = compile_one(name, config);
    assert_eq!(publishers.children().len(), 1);
    publishers.children()[0].clone()
}

#[test]
fn test_junit_renders_results_and_keeps_long_stdio() {
    insta::assert_snapshot!(render("junit", json!({"results": "out.xml"})), @r###"
    <publishers>
      <hudson.tasks.junit.JUnitResultArchiver>
        <testResults>out.xml</testResults>
        <keepLongStdio>true</keepLongStdio>
        <testDataPublishers/>
      </hudson.tasks.junit.JUnitResultArchiver>
    </publishers>
    "###);
}

#[test]
fn test_archive_with_every_option() {
    let xml = render(
        "archive",
        json!({"artifacts": "*.tar.gz", "excludes": "*.tmp", "latest-only": true}),
    );
    insta::assert_snapshot!(xml, @r###"
    <publishers>
      <hudson.tasks.ArtifactArchiver>
        <artifacts>*.tar.gz</artifacts>
        <excludes>*.tmp</excludes>
        <latestOnly>true</latestOnly>
      </hudson.tasks.ArtifactArchiver>
    </publishers>
    "###);
}

#[test]
fn test_trigger_threshold_block() {
    let xml = render("trigger", json!({"project": "other_job", "threshold": "UNSTABLE"}));
    insta::assert_snapshot!(xml, @r###"
    <publishers>
      <hudson.tasks.BuildTrigger>
        <childProjects>other_job</childProjects>
        <threshold>
          <name>UNSTABLE</name>
          <ordinal>1</ordinal>
          <color>YELLOW</color>
        </threshold>
      </hudson.tasks.BuildTrigger>
    </publishers>
    "###);
}

#[test]
fn test_xunit_types_and_thresholds() {
    let xml = render(
        "xunit",
        json!({
            "types": [{"junit": {"pattern": "junit.xml", "requireupdate": false}}],
            "thresholds": [{"failed": {"unstable": 0, "failure": 0}}]
        }),
    );
    insta::assert_snapshot!(xml, @r###"
    <publishers>
      <xunit>
        <types>
          <JUnitType>
            <pattern>junit.xml</pattern>
            <failIfNotNew>false</failIfNotNew>
            <deleteOutputFiles>true</deleteOutputFiles>
            <stopProcessingIfError>true</stopProcessingIfError>
          </JUnitType>
        </types>
        <thresholds>
          <org.jenkinsci.plugins.xunit.threshold.FailedThreshold>
            <unstableThreshold>0</unstableThreshold>
            <failureThreshold>0</failureThreshold>
          </org.jenkinsci.plugins.xunit.threshold.FailedThreshold>
        </thresholds>
        <thresholdMode>1</thresholdMode>
      </xunit>
    </publishers>
    "###);
}

#[test]
fn test_xunit_unknown_type_is_dropped_with_warning() {
    let (publishers, diagnostics) = compile_one(
        "xunit",
        json!({
            "types": [
                {"fakeunit": {"pattern": "a.xml"}},
                {"phpunit": {"pattern": "phpunit.log"}}
            ],
            "thresholdmode": "percent"
        }),
    );
    let xunit = &publishers.children()[0];
    assert_eq!(xunit.child_tags(), vec!["types", "thresholds", "thresholdMode"]);
    assert!(xunit.find_path("types/PHPUnitJunitHudsonTestType").is_some());
    assert_eq!(xunit.text_at("thresholdMode"), Some("2"));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.entries()[0].code, "PUB-WARN-001");
    assert!(diagnostics.entries()[0].message.contains("fakeunit"));
}

#[test]
fn test_violations_defaults_for_every_system() {
    let publisher = plugin("violations", Value::Null);
    let configs = publisher.find_path("config/typeConfigs").unwrap();
    let entries: Vec<&XmlElement> = configs.find_all("entry").collect();
    assert_eq!(entries.len(), 15);
    for entry in entries {
        let type_config = entry.find("hudson.plugins.violations.TypeConfig").unwrap();
        assert_eq!(type_config.text_at("min"), Some("10"));
        assert_eq!(type_config.text_at("max"), Some("999"));
        assert_eq!(type_config.text_at("unstable"), Some("999"));
        assert_eq!(type_config.text_at("usePattern"), Some("false"));
    }
}

#[test]
fn test_violations_override_touches_only_that_system() {
    let publisher = plugin(
        "violations",
        json!({"pep8": {"min": 0, "max": 1, "unstable": 1, "pattern": "**/pep8.txt"}}),
    );
    let configs = publisher.find_path("config/typeConfigs").unwrap();
    for entry in configs.find_all("entry") {
        let type_config = entry.find("hudson.plugins.violations.TypeConfig").unwrap();
        if entry.text_at("string") == Some("pep8") {
            assert_eq!(type_config.text_at("min"), Some("0"));
            assert_eq!(type_config.text_at("max"), Some("1"));
            assert_eq!(type_config.text_at("pattern"), Some("**/pep8.txt"));
        } else {
            assert_eq!(type_config.text_at("min"), Some("10"));
        }
    }
}

#[test]
fn test_transport_actions_keep_empty_excludes_and_remove_prefix() {
    for (name, transfer_path) in [
        (
            "ftp",
            "delegate/publishers/jenkins.plugins.publish__over__ftp.BapFtpPublisher/transfers/jenkins.plugins.publish__over__ftp.BapFtpTransfer",
        ),
        (
            "cifs",
            "delegate/publishers/jenkins.plugins.publish__over__cifs.CifsPublisher/transfers/jenkins.plugins.publish__over__cifs.CifsTransfer",
        ),
    ] {
        let publisher = plugin(
            name,
            json!({"site": "host", "source": "dist/**", "target": "releases"}),
        );
        let transfer = publisher.find_path(transfer_path).unwrap();
        assert_eq!(transfer.text_at("excludes"), Some(""), "{}", name);
        assert_eq!(transfer.text_at("removePrefix"), Some(""), "{}", name);
        assert_eq!(transfer.text_at("sourceFiles"), Some("dist/**"), "{}", name);
    }
}

/// Every leaf under `element` as `(path, text)`, in document order.
fn leaves(element: &XmlElement) -> Vec<(String, String)> {
    fn walk(element: &XmlElement, prefix: &str, out: &mut Vec<(String, String)>) {
        for child in element.children() {
            let path = if prefix.is_empty() {
                child.tag().to_string()
            } else {
                format!("{}/{}", prefix, child.tag())
            };
            if child.children().is_empty() {
                out.push((path, child.text().to_string()));
            } else {
                walk(child, &path, out);
            }
        }
    }
    let mut out = Vec::new();
    walk(element, "", &mut out);
    out
}

#[test]
fn test_optional_boolean_flips_only_its_field() {
    let entry = "entries/be.certipost.hudson.plugin.Entry";
    let cases = [
        (
            "email",
            json!({"recipients": "team@example.com"}),
            json!({"recipients": "team@example.com", "send-to-individuals": true}),
            "sendToIndividuals".to_string(),
            ("false", "true"),
        ),
        (
            "email",
            json!({"recipients": "team@example.com"}),
            json!({"recipients": "team@example.com", "notify-every-unstable-build": "False"}),
            "dontNotifyEveryUnstableBuild".to_string(),
            ("false", "true"),
        ),
        (
            "fingerprint",
            json!({"files": "*.jar"}),
            json!({"files": "*.jar", "record-artifacts": true}),
            "recordBuildArtifacts".to_string(),
            ("false", "true"),
        ),
        (
            "logparser",
            json!({"parse-rules": "/rules"}),
            json!({"parse-rules": "/rules", "unstable-on-warning": 1}),
            "unstableOnWarning".to_string(),
            ("false", "true"),
        ),
        (
            "logparser",
            json!({"parse-rules": "/rules"}),
            json!({"parse-rules": "/rules", "fail-on-error": "TRUE"}),
            "failBuildOnError".to_string(),
            ("false", "true"),
        ),
        (
            "aggregate-tests",
            json!({}),
            json!({"include-failed-builds": true}),
            "includeFailedBuilds".to_string(),
            ("false", "true"),
        ),
        (
            "scp",
            json!({"site": "repo", "files": [{"target": "out", "source": "a"}]}),
            json!({"site": "repo", "files": [{"target": "out", "source": "a", "keep-hierarchy": true}]}),
            format!("{}/keepHierarchy", entry),
            ("false", "true"),
        ),
        (
            "scp",
            json!({"site": "repo", "files": [{"target": "out", "source": "a"}]}),
            json!({"site": "repo", "files": [{"target": "out", "source": "a", "copy-console": true}]}),
            format!("{}/copyConsoleLog", entry),
            ("false", "true"),
        ),
        (
            "scp",
            json!({"site": "repo", "files": [{"target": "out", "source": "a"}]}),
            json!({"site": "repo", "files": [{"target": "out", "source": "a", "copy-after-failure": true}]}),
            format!("{}/copyAfterFailure", entry),
            ("false", "true"),
        ),
        (
            "cppcheck",
            json!({"pattern": "cppcheck.xml"}),
            json!({"pattern": "cppcheck.xml", "ignoreblankfiles": true}),
            "cppcheckConfig/ignoreBlankFiles".to_string(),
            ("false", "true"),
        ),
        (
            "cppcheck",
            json!({"pattern": "cppcheck.xml"}),
            json!({"pattern": "cppcheck.xml", "thresholds": {"severity": {"style": false}}}),
            "cppcheckConfig/configSeverityEvaluation/severityStyle".to_string(),
            ("true", "false"),
        ),
        (
            "cppcheck",
            json!({"pattern": "cppcheck.xml"}),
            json!({"pattern": "cppcheck.xml", "graph": {"display": {"warning": true}}}),
            "cppcheckConfig/configGraph/displayWarningSeverity".to_string(),
            ("false", "true"),
        ),
    ];

    for (action, base, flipped, path, (before, after)) in cases {
        let base = leaves(&plugin(action, base));
        let flipped = leaves(&plugin(action, flipped));
        assert_eq!(base.len(), flipped.len(), "{} {}", action, path);

        let mut changed = 0;
        for ((base_path, base_text), (flipped_path, flipped_text)) in base.iter().zip(&flipped) {
            assert_eq!(base_path, flipped_path, "{}", action);
            if *base_path == path {
                changed += 1;
                assert_eq!(base_text, before, "{} {}", action, path);
                assert_eq!(flipped_text, after, "{} {}", action, path);
            } else {
                assert_eq!(base_text, flipped_text, "{} {} moved {}", action, path, base_path);
            }
        }
        assert_eq!(changed, 1, "{} {}", action, path);
    }
}

#[test]
fn test_null_optional_options_take_defaults() {
    let logparser = plugin(
        "logparser",
        json!({"parse-rules": "/rules", "fail-on-error": null}),
    );
    assert_eq!(logparser.text_at("failBuildOnError"), Some("false"));
    assert_eq!(logparser.text_at("parsingRulesPath"), Some("/rules"));

    let email_ext = plugin("email-ext", json!({"subject": null}));
    assert_eq!(email_ext.text_at("defaultSubject"), Some("$DEFAULT_SUBJECT"));

    let archive = plugin("archive", json!({"artifacts": "a", "latest_only": null}));
    assert_eq!(archive.text_at("latestOnly"), Some("false"));
    assert_eq!(archive.text_at("artifacts"), Some("a"));

    let email = plugin(
        "email",
        json!({"recipients": "team@example.com", "notify-every-unstable-build": null}),
    );
    assert_eq!(email.text_at("dontNotifyEveryUnstableBuild"), Some("false"));
}

#[test]
fn test_parameterized_trigger_without_parameters() {
    let publisher = plugin(
        "trigger-parameterized-builds",
        json!([{"project": "downstream"}]),
    );
    assert_eq!(publisher.tag(), "hudson.plugins.parameterizedtrigger.BuildTrigger");
    let config = &publisher.find("configs").unwrap().children()[0];
    assert_eq!(
        config.find("configs").unwrap().attribute("class"),
        Some("java.util.Collections$EmptyList")
    );
    assert_eq!(config.text_at("projects"), Some("downstream"));
    assert_eq!(config.text_at("condition"), Some("ALWAYS"));
}

#[test]
fn test_email_ext_enables_failure_trigger_by_default() {
    let publisher = plugin("email-ext", Value::Null);
    let triggers = publisher.find("configuredTriggers").unwrap();
    assert_eq!(
        triggers.child_tags(),
        vec!["hudson.plugins.emailext.plugins.trigger.FailureTrigger"]
    );
}

#[test]
fn test_fatal_errors_by_category() {
    let cases = [
        ("junit", json!({}), ErrorCategory::MissingField),
        ("junit", json!({"results": null}), ErrorCategory::MissingField),
        ("trigger", json!({"project": "p", "threshold": "GREEN"}), ErrorCategory::InvalidValue),
        ("xunit", json!({"types": [], "thresholdmode": "ratio"}), ErrorCategory::InvalidValue),
        ("archive", json!(["not", "a", "map"]), ErrorCategory::InvalidShape),
        ("scp", json!({"site": "s", "files": [{"source": "a"}]}), ErrorCategory::MissingField),
    ];
    for (name, config, category) in cases {
        let mut diagnostics = Diagnostics::new();
        let err = compile_publishers(
            PublisherRegistry::global(),
            &[Action::new(name, config.clone())],
            &mut diagnostics,
        )
        .unwrap_err();
        assert_eq!(err.category, category, "{} with {}", name, config);
    }
}
