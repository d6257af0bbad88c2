//! `physical` commands: grant, revoke and list physical partition access.

use crate::cmdline::{ArgList, CommandGroup, CommandParser, Session};
use crate::control::{Command, PhysicalGrant, PhysicalList, PhysicalRevoke};
use crate::error::{ControlError, ControlResult};
use crate::state::{AccessMode, DomainId, PartitionName};

/// The `physical` command group.
pub static PHYSICAL: CommandGroup = CommandGroup::new(
    "physical",
    "Manage domains' physical access to partitions.",
    &[&PHYSICAL_GRANT, &PHYSICAL_REVOKE, &PHYSICAL_LIST],
);

/// `physical grant` instance.
pub static PHYSICAL_GRANT: PhysicalGrantParser = PhysicalGrantParser;

/// `physical revoke` instance.
pub static PHYSICAL_REVOKE: PhysicalRevokeParser = PhysicalRevokeParser;

/// `physical list` instance.
pub static PHYSICAL_LIST: PhysicalListParser = PhysicalListParser;

/// `-n<domain_id>`: required, 0 counts as missing.
fn domain_parameter(args: &mut ArgList) -> ControlResult<DomainId> {
    let domain_id: u32 = args.int_parameter('n', 0)?;
    DomainId::new(domain_id).ok_or_else(|| ControlError::parse("Expected -n<domain_id>"))
}

/// `-p<partition_name>`: required, empty counts as missing.
fn partition_parameter(args: &mut ArgList) -> ControlResult<PartitionName> {
    let partition_name = args.string_parameter('p', "");
    PartitionName::new(partition_name).ok_or_else(|| ControlError::parse("Expected -p<partition_name>"))
}

pub struct PhysicalGrantParser;

impl CommandParser for PhysicalGrantParser {
    fn name(&self) -> &'static str {
        "grant"
    }

    fn usage(&self) -> &'static str {
        "-n<domain_id> -p<partition_name> [-f<r|w|rw>]"
    }

    fn help(&self) -> &'static str {
        "Grant the specified domain access to the given partition."
    }

    fn parse(&self, session: &mut Session, args: &mut ArgList) -> ControlResult<()> {
        let domain = domain_parameter(args)?;
        let partition = partition_parameter(args)?;
        let mode = match args.string_parameter('f', "").as_str() {
            "" => None,
            flags => Some(
                flags
                    .parse::<AccessMode>()
                    .map_err(|_| ControlError::parse("Expected -f<r|w|rw>"))?,
            ),
        };

        session.load_state()?;
        let output = PhysicalGrant::new(&session.defaults, domain, partition, mode)
            .execute(&mut session.loader)?;
        session.deliver(output);
        Ok(())
    }
}

pub struct PhysicalRevokeParser;

impl CommandParser for PhysicalRevokeParser {
    fn name(&self) -> &'static str {
        "revoke"
    }

    fn usage(&self) -> &'static str {
        "-n<domain_id> -p<partition_name>"
    }

    fn help(&self) -> &'static str {
        "Revoke access to the given partition from the specified domain."
    }

    fn parse(&self, session: &mut Session, args: &mut ArgList) -> ControlResult<()> {
        let domain = domain_parameter(args)?;
        let partition = partition_parameter(args)?;

        // Initialise the host state before looking anything up.
        session.load_state()?;
        let output = PhysicalRevoke::new(&session.defaults, domain, partition)
            .execute(&mut session.loader)?;
        session.deliver(output);
        Ok(())
    }
}

pub struct PhysicalListParser;

impl CommandParser for PhysicalListParser {
    fn name(&self) -> &'static str {
        "list"
    }

    fn usage(&self) -> &'static str {
        "-n<domain_id>"
    }

    fn help(&self) -> &'static str {
        "List the partitions the specified domain has access to."
    }

    fn parse(&self, session: &mut Session, args: &mut ArgList) -> ControlResult<()> {
        let domain = domain_parameter(args)?;

        session.load_state()?;
        let output = PhysicalList::new(domain).execute(&mut session.loader)?;
        session.deliver(output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Defaults;
    use crate::console::Console;
    use crate::state::tests::{dom, part, sample_state};
    use crate::state::{HostState, StateLoader};

    fn session(state: HostState) -> Session {
        Session::new(Defaults::default(), StateLoader::in_memory(state), Console::capture())
    }

    fn run(parser: &dyn CommandParser, session: &mut Session, line: &str) -> ControlResult<()> {
        let mut args: ArgList = line.split_whitespace().collect();
        parser.parse(session, &mut args)
    }

    #[test]
    fn revoke_identity() {
        assert_eq!(PHYSICAL_REVOKE.name(), "revoke");
        assert_eq!(PHYSICAL_REVOKE.usage(), "-n<domain_id> -p<partition_name>");
        assert_eq!(
            PHYSICAL_REVOKE.help(),
            "Revoke access to the given partition from the specified domain."
        );
    }

    #[test]
    fn revoke_removes_grant() {
        let mut s = session(sample_state());
        run(&PHYSICAL_REVOKE, &mut s, "-n5 -pdisk0").unwrap();
        assert!(s.loader.loaded().unwrap().grant(dom(5), &part("disk0")).is_none());
        assert!(s.console.captured().is_empty());
    }

    #[test]
    fn revoke_flags_in_either_order() {
        let mut s = session(sample_state());
        run(&PHYSICAL_REVOKE, &mut s, "-pdisk0 -x9 -n5").unwrap();
        assert!(s.loader.loaded().unwrap().grant(dom(5), &part("disk0")).is_none());
    }

    #[test]
    fn revoke_without_domain() {
        let mut s = session(sample_state());
        assert_eq!(
            run(&PHYSICAL_REVOKE, &mut s, "-pdisk0"),
            Err(ControlError::parse("Expected -n<domain_id>"))
        );
        assert_eq!(s.loader.loaded().unwrap(), &sample_state());
    }

    #[test]
    fn revoke_with_zero_domain() {
        let mut s = session(sample_state());
        assert_eq!(
            run(&PHYSICAL_REVOKE, &mut s, "-n0 -pdisk0"),
            Err(ControlError::parse("Expected -n<domain_id>"))
        );
    }

    #[test]
    fn revoke_domain_checked_before_partition() {
        let mut s = session(sample_state());
        assert_eq!(
            run(&PHYSICAL_REVOKE, &mut s, ""),
            Err(ControlError::parse("Expected -n<domain_id>"))
        );
    }

    #[test]
    fn revoke_without_partition() {
        let mut s = session(sample_state());
        assert_eq!(
            run(&PHYSICAL_REVOKE, &mut s, "-n5"),
            Err(ControlError::parse("Expected -p<partition_name>"))
        );
        assert_eq!(
            run(&PHYSICAL_REVOKE, &mut s, "-n5 -p"),
            Err(ControlError::parse("Expected -p<partition_name>"))
        );
    }

    #[test]
    fn revoke_malformed_domain() {
        let mut s = session(sample_state());
        let err = run(&PHYSICAL_REVOKE, &mut s, "-nfive -pdisk0").unwrap_err();
        assert!(err.is_parse_failure());
        assert!(err.to_string().contains("-n"));
    }

    #[test]
    fn revoke_missing_grant_is_command_failure() {
        let mut s = session(sample_state());
        assert_eq!(
            run(&PHYSICAL_REVOKE, &mut s, "-n7 -pdisk0"),
            Err(ControlError::CommandFailed(
                "Domain 7 has no access to partition disk0".into()
            ))
        );
    }

    #[test]
    fn valid_flags_never_fail_validation() {
        for (d, p) in [(1, "a"), (5, "disk0"), (u32::MAX, "sda1"), (42, "x-y_z")] {
            let mut s = session(HostState::new());
            let line = format!("-n{d} -p{p}");
            let err = run(&PHYSICAL_REVOKE, &mut s, &line).unwrap_err();
            assert!(!err.is_parse_failure(), "{line}: {err}");
        }
    }

    #[test]
    fn grant_then_list() {
        let mut s = session(sample_state());
        run(&PHYSICAL_GRANT, &mut s, "-n7 -pdisk1 -frw").unwrap();
        run(&PHYSICAL_LIST, &mut s, "-n7").unwrap();

        let out = s.console.captured();
        assert_eq!(out.len(), 1);
        assert!(out[0].lines().nth(1).unwrap().starts_with("disk1"));
        assert!(out[0].contains("rw"));
    }

    #[test]
    fn grant_bad_mode() {
        let mut s = session(sample_state());
        assert_eq!(
            run(&PHYSICAL_GRANT, &mut s, "-n7 -pdisk1 -fx"),
            Err(ControlError::parse("Expected -f<r|w|rw>"))
        );
        assert!(s.loader.loaded().unwrap().grant(dom(7), &part("disk1")).is_none());
    }

    #[test]
    fn list_requires_domain() {
        let mut s = session(sample_state());
        assert_eq!(
            run(&PHYSICAL_LIST, &mut s, ""),
            Err(ControlError::parse("Expected -n<domain_id>"))
        );
    }

    #[test]
    fn group_forwards_to_member() {
        let mut s = session(sample_state());
        run(&PHYSICAL, &mut s, "revoke -n5 -pdisk0").unwrap();
        assert!(s.loader.loaded().unwrap().grant(dom(5), &part("disk0")).is_none());
    }

    #[test]
    fn group_needs_known_subcommand() {
        let mut s = session(sample_state());
        assert_eq!(
            run(&PHYSICAL, &mut s, "-n5"),
            Err(ControlError::parse("Expected sub-command for physical"))
        );
        assert_eq!(
            run(&PHYSICAL, &mut s, "steal -n5"),
            Err(ControlError::parse("Unknown sub-command 'steal' for physical"))
        );
    }
}
