#[cfg(test)]
mod patch_pipeline_tests {
    use std::collections::BTreeSet;
    use std::io::Write;
    use std::net::Ipv4Addr;
    use tempfile::NamedTempFile;

    use wgresolve::cidr::CidrSuffix;
    use wgresolve::domains::load_domain_specs;
    use wgresolve::error::Error;
    use wgresolve::output::{join_lines, write_output};
    use wgresolve::patcher::{patch_allowed_ips, read_template_lines};
    use wgresolve::resolver::{build_ip_set, Resolve};

    /// Fixed-table resolver so the pipeline tests never touch the network
    struct TableResolver(Vec<(&'static str, Vec<Ipv4Addr>)>);

    impl Resolve for TableResolver {
        fn resolve_ipv4(&self, domain: &str) -> std::io::Result<Vec<Ipv4Addr>> {
            self.0
                .iter()
                .find(|(d, _)| *d == domain)
                .map(|(_, ips)| ips.clone())
                .ok_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::NotFound, "name not found")
                })
        }
    }

    fn template_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    fn ip_set(ips: &[&str]) -> BTreeSet<String> {
        ips.iter().map(|s| s.to_string()).collect()
    }

    const TEMPLATE: &str = "\
[Interface]
Address = 10.0.0.1
PrivateKey = abc

[Peer]
PublicKey = X
Endpoint = vpn.example.com:51820
";

    /// Full run: domain file -> resolution -> append patch -> output file
    #[test]
    fn test_end_to_end_append_run() {
        let mut domain_file = NamedTempFile::new().unwrap();
        write!(
            domain_file,
            "# internal services\nexample.com\nhttps://api.example.org/v1,/24\n"
        )
        .unwrap();

        let resolver = TableResolver(vec![
            ("example.com", vec!["93.184.216.34".parse().unwrap()]),
            ("api.example.org", vec!["198.51.100.0".parse().unwrap()]),
        ]);

        let specs = load_domain_specs(&domain_file.path().to_string_lossy()).unwrap();
        let default = CidrSuffix::parse("32").unwrap();
        let ips = build_ip_set(&resolver, &specs, &default).unwrap();

        let template = template_file(TEMPLATE);
        let lines = read_template_lines(template.path()).unwrap();
        let patched = patch_allowed_ips(&lines, &ips, false).unwrap();

        let out_file = NamedTempFile::new().unwrap();
        write_output(&join_lines(&patched), Some(out_file.path())).unwrap();

        let written = std::fs::read_to_string(out_file.path()).unwrap();
        assert!(written.ends_with(
            "[Peer]\nPublicKey = X\nEndpoint = vpn.example.com:51820\n\
             AllowedIPs = 198.51.100.0/24, 93.184.216.34/32\n"
        ));
        // Template untouched
        assert_eq!(std::fs::read_to_string(template.path()).unwrap(), TEMPLATE);
    }

    /// Applying overwrite twice with the same set yields identical output
    /// with exactly one AllowedIPs line
    #[test]
    fn test_overwrite_idempotence_on_file() {
        let template = template_file(
            "[Peer]\nAllowedIPs = 9.9.9.9/32\nAllowedIPs = 8.8.8.8/32\nPublicKey = X\n",
        );
        let set = ip_set(&["1.1.1.1/32"]);

        let lines = read_template_lines(template.path()).unwrap();
        let once = patch_allowed_ips(&lines, &set, true).unwrap();
        let twice = patch_allowed_ips(&once, &set, true).unwrap();

        assert_eq!(once, twice);
        let count = twice
            .iter()
            .filter(|l| l.trim().starts_with("AllowedIPs ="))
            .count();
        assert_eq!(count, 1);
        assert_eq!(twice[1], "AllowedIPs = 1.1.1.1/32\n");
    }

    /// Repeated append runs with disjoint sets accumulate distinct lines
    /// inside the [Peer] section, in insertion order
    #[test]
    fn test_append_accumulation_with_following_section() {
        let template = template_file("[Peer]\nPublicKey = X\n[Extra]\nKey = V\n");
        let mut lines = read_template_lines(template.path()).unwrap();

        for set in [
            ip_set(&["1.1.1.1/32"]),
            ip_set(&["2.2.2.2/32"]),
            ip_set(&["3.3.3.3/32"]),
        ] {
            lines = patch_allowed_ips(&lines, &set, false).unwrap();
        }

        assert_eq!(
            lines,
            vec![
                "[Peer]\n".to_string(),
                "PublicKey = X\n".to_string(),
                "AllowedIPs = 1.1.1.1/32\n".to_string(),
                "AllowedIPs = 2.2.2.2/32\n".to_string(),
                "AllowedIPs = 3.3.3.3/32\n".to_string(),
                "[Extra]\n".to_string(),
                "Key = V\n".to_string(),
            ]
        );
    }

    /// Duplicate resolutions collapse to a single formatted entry before
    /// patching
    #[test]
    fn test_dedup_through_resolution() {
        let resolver = TableResolver(vec![
            ("a.example", vec!["1.2.3.4".parse().unwrap()]),
            ("b.example", vec!["1.2.3.4".parse().unwrap()]),
        ]);
        let specs = load_domain_specs("a.example").unwrap();
        let mut all = specs;
        all.extend(load_domain_specs("b.example").unwrap());

        let default = CidrSuffix::parse("32").unwrap();
        let ips = build_ip_set(&resolver, &all, &default).unwrap();
        assert_eq!(ips.len(), 1);

        let lines = vec!["[Peer]\n".to_string(), "PublicKey = X\n".to_string()];
        let patched = patch_allowed_ips(&lines, &ips, false).unwrap();
        assert_eq!(patched.last().unwrap(), "AllowedIPs = 1.2.3.4/32\n");
    }

    /// A template without [Peer] fails in both modes when no existing
    /// AllowedIPs line anchors the overwrite
    #[test]
    fn test_missing_peer_section_is_fatal() {
        let template = template_file("[Interface]\nAddress = 10.0.0.1\n");
        let lines = read_template_lines(template.path()).unwrap();
        let set = ip_set(&["1.2.3.4/32"]);

        assert!(matches!(
            patch_allowed_ips(&lines, &set, false),
            Err(Error::NoPeerSection)
        ));
        assert!(matches!(
            patch_allowed_ips(&lines, &set, true),
            Err(Error::NoPeerSection)
        ));
    }

    /// A resolver that fails for one domain but not another still produces
    /// a usable run
    #[test]
    fn test_partial_resolution_failure_continues() {
        let resolver = TableResolver(vec![(
            "good.example",
            vec!["203.0.113.7".parse().unwrap()],
        )]);
        let mut specs = load_domain_specs("missing.example").unwrap();
        specs.extend(load_domain_specs("good.example").unwrap());

        let default = CidrSuffix::parse("HOST").unwrap();
        let ips = build_ip_set(&resolver, &specs, &default).unwrap();
        assert_eq!(ips.into_iter().collect::<Vec<_>>(), vec!["203.0.113.7/32"]);
    }

    /// All domains failing is an aggregate fatal error
    #[test]
    fn test_total_resolution_failure_is_fatal() {
        let resolver = TableResolver(vec![]);
        let specs = load_domain_specs("missing.example").unwrap();
        let default = CidrSuffix::parse("32").unwrap();
        assert!(matches!(
            build_ip_set(&resolver, &specs, &default),
            Err(Error::NoIpsResolved)
        ));
    }

    /// Missing template file surfaces a path-tagged read error
    #[test]
    fn test_unreadable_template_is_fatal() {
        let result = read_template_lines(std::path::Path::new("/nonexistent/wg0.conf"));
        assert!(matches!(result, Err(Error::TemplateRead { .. })));
    }
}
