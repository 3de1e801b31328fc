use itertools::Itertools;
use proptest::prelude::*;

use super::*;
use crate::Error;

fn prefix(s: &str) -> Ipv4Prefix {
    s.parse().unwrap()
}

fn addr(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

#[test]
fn longest_wins() {
    let table = RouteTable::sample();
    assert_eq!(table.len(), 4);

    assert_eq!(table.lookup(addr("10.0.0.1")), Some(&addr("10.0.0.1")));
    assert_eq!(table.lookup(addr("10.0.1.35")), Some(&addr("10.0.0.2")));
    assert_eq!(table.lookup(addr("10.1.5.9")), Some(&addr("10.0.0.3")));
    assert_eq!(table.lookup(addr("11.0.0.1")), Some(&addr("10.0.0.4")));
}

#[test]
fn lookup_reports_matched_prefix() {
    let table = RouteTable::sample();
    assert_eq!(
        table.lookup_route(0x0A000123u32),
        Some((prefix("10.0.1.0/24"), &addr("10.0.0.2")))
    );
    assert_eq!(
        table.lookup_route([11u8, 0, 0, 1]),
        Some((Ipv4Prefix::DEFAULT, &addr("10.0.0.4")))
    );
}

#[test]
fn zero_next_hop_is_a_match() {
    let mut table = RouteTable::new();
    table.insert(prefix("192.168.1.7/32"), 0u32);
    assert_eq!(table.lookup(addr("192.168.1.7")), Some(&0));
    assert_eq!(table.lookup(addr("192.168.1.8")), None);

    table.insert(Ipv4Prefix::DEFAULT, 0);
    assert_eq!(table.lookup(addr("192.168.1.8")), Some(&0));
}

#[test]
fn host_route_is_reached() {
    let mut table = RouteTable::new();
    table.insert(prefix("10.0.0.0/8"), 'a');
    table.insert(prefix("10.0.0.1"), 'b');
    assert_eq!(table.lookup(addr("10.0.0.1")), Some(&'b'));
    assert_eq!(table.lookup(addr("10.0.0.2")), Some(&'a'));
    assert_eq!(table.lookup(addr("255.255.255.255")), None);
}

#[test]
fn empty_table() {
    let table = RouteTable::<Ipv4Addr>::new();
    assert!(table.is_empty());
    assert_eq!(table.lookup(addr("0.0.0.0")), None);
    assert_eq!(table.lookup(addr("10.0.0.1")), None);
    assert_eq!(table.routes().count(), 0);
}

#[test]
fn clear_then_reuse() {
    let mut table = RouteTable::sample();
    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.lookup(addr("11.0.0.1")), None);
    assert_eq!(table.lookup(addr("10.0.0.1")), None);
    assert_eq!(table.routes().count(), 0);

    table.insert(prefix("10.0.0.0/8"), addr("10.0.0.9"));
    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup(addr("10.0.0.1")), Some(&addr("10.0.0.9")));
    assert_eq!(table.lookup(addr("11.0.0.1")), None);
}

#[test]
fn insert_order_is_irrelevant() {
    let forward = RouteTable::sample();
    let backward = forward
        .routes()
        .map(|route| Route {
            prefix: route.prefix,
            next_hop: *route.next_hop,
        })
        .collect_vec()
        .into_iter()
        .rev()
        .collect::<RouteTable>();

    for probe in ["10.0.0.1", "10.0.1.35", "10.1.5.9", "11.0.0.1"] {
        assert_eq!(forward.lookup(addr(probe)), backward.lookup(addr(probe)));
    }
}

#[test]
fn replace_next_hop() {
    let mut table = RouteTable::sample();
    assert_eq!(
        table.insert(prefix("10.1.0.0/16"), addr("10.9.9.9")),
        Some(addr("10.0.0.3"))
    );
    assert_eq!(table.len(), 4);
    assert_eq!(table.get(&prefix("10.1.0.0/16")), Some(&addr("10.9.9.9")));
    assert_eq!(table.get(&prefix("10.1.0.0/17")), None);
}

#[test]
fn routes_in_bit_order() {
    let table = RouteTable::sample();
    let routes = table.routes().map(|route| route.to_string()).collect_vec();
    assert_eq!(
        routes,
        vec![
            "0.0.0.0/0 via 10.0.0.4",
            "10.0.0.0/24 via 10.0.0.1",
            "10.0.1.0/24 via 10.0.0.2",
            "10.1.0.0/16 via 10.0.0.3",
        ]
    );
}

#[test]
fn parse_prefix() {
    assert_eq!(prefix("10.1.2.3/16").to_string(), "10.1.0.0/16");
    assert_eq!(prefix(" 10.1.2.3 ").to_string(), "10.1.2.3/32");
    assert_eq!(prefix("0.0.0.0/0"), Ipv4Prefix::DEFAULT);
    assert_eq!(prefix("10.1.2.3/16").mask(), addr("255.255.0.0"));
    assert!(prefix("10.1.0.0/16").contains(addr("10.1.200.3")));
    assert!(!prefix("10.1.0.0/16").contains(addr("10.2.0.0")));
    assert!(Ipv4Prefix::DEFAULT.contains(addr("1.2.3.4")));

    assert!(matches!(
        "10.0.0.0/33".parse::<Ipv4Prefix>(),
        Err(Error::InvalidPrefixLength(33))
    ));
    assert!(matches!(
        "10.0.0.0/300".parse::<Ipv4Prefix>(),
        Err(Error::InvalidPrefixLength(300))
    ));
    assert!(matches!(
        "10.0.0.0/-1".parse::<Ipv4Prefix>(),
        Err(Error::InvalidPrefix(_))
    ));
    assert!(matches!(
        "10.0.0/8".parse::<Ipv4Prefix>(),
        Err(Error::InvalidAddress(_))
    ));
    assert!(matches!(
        Ipv4Prefix::new(addr("10.0.0.0"), 40),
        Err(Error::InvalidPrefixLength(40))
    ));
}

#[test]
fn bits_round_trip_through_tree() {
    let original = prefix("172.16.0.0/12");
    let mut table = RouteTable::new();
    table.insert(original, ());
    let found = table.routes().map(|route| route.prefix).collect_vec();
    assert_eq!(found, vec![original]);
}

fn route_sets() -> impl Strategy<Value = Vec<(u32, u8, u16)>> {
    prop::collection::vec((any::<u32>(), 0u8..=32, any::<u16>()), 0..40)
}

proptest! {
    #[test]
    fn agrees_with_linear_scan(routes in route_sets(), probes in prop::collection::vec(any::<u32>(), 1..20)) {
        let routes = routes
            .into_iter()
            .map(|(addr, length, hop)| (Ipv4Prefix::new(addr, length).unwrap(), hop))
            .collect_vec();
        let table: RouteTable<u16> = routes.iter().copied().collect();

        // Later inserts replace earlier ones for the same prefix.
        let scan = |probe: u32| {
            routes
                .iter()
                .filter(|(prefix, _)| prefix.contains(probe))
                .max_by_key(|(prefix, _)| prefix.length())
                .map(|(prefix, hop)| (*prefix, *hop))
        };

        for probe in probes.into_iter().chain(routes.iter().map(|(p, _)| u32::from(p.addr()))) {
            let found = table.lookup_route(probe).map(|(prefix, hop)| (prefix, *hop));
            prop_assert_eq!(found, scan(probe));
        }
    }
}
