//! Built-in publisher actions, one module per action name.

pub mod archive;
pub mod checkstyle;
pub mod cifs;
pub mod claim_build;
pub mod copy_to_master;
pub mod coverage;
pub mod cppcheck;
pub mod deploy;
pub mod email;
pub mod email_ext;
pub mod fingerprint;
pub mod ftp;
pub mod groovy_postbuild;
pub mod jira;
pub mod junit;
pub mod logparser;
pub mod pipeline;
pub mod scp;
pub mod trigger;
pub mod trigger_parameterized_builds;
pub mod violations;
pub mod xunit;

use crate::core::publishers::registry::PublisherRegistryBuilder;

/// Register every built-in publisher into the supplied builder.
pub fn register_builtins(builder: &mut PublisherRegistryBuilder) {
    builder
        .register(archive::ArchivePublisher)
        .register(deploy::DeployPublisher)
        .register(trigger_parameterized_builds::ParameterizedTriggerPublisher)
        .register(trigger::TriggerPublisher)
        .register(coverage::CoveragePublisher)
        .register(ftp::FtpPublisher)
        .register(junit::JunitPublisher)
        .register(xunit::XunitPublisher)
        .register(violations::ViolationsPublisher)
        .register(checkstyle::CheckstylePublisher)
        .register(scp::ScpPublisher)
        .register(pipeline::PipelinePublisher)
        .register(email::EmailPublisher)
        .register(claim_build::ClaimBuildPublisher)
        .register(email_ext::EmailExtPublisher)
        .register(fingerprint::FingerprintPublisher)
        .register(aggregate_tests::AggregateTestsPublisher)
        .register(cppcheck::CppcheckPublisher)
        .register(logparser::LogParserPublisher)
        .register(copy_to_master::CopyToMasterPublisher)
        .register(jira::JiraPublisher)
        .register(groovy_postbuild::GroovyPostbuildPublisher)
        .register(cifs::CifsPublisher);
}
