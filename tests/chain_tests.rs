// Host-side tests for chain traversal.

use ztoline_core::*;

fn run_cycle(chain: &mut NodeChain) -> ChainStep {
    assert!(chain.request_start(), "current node should be idle");
    for _ in 0..1000 {
        match chain.update() {
            ChainStep::Continuing => assert_eq!(chain.active_count(), 1),
            settled => return settled,
        }
    }
    panic!("cycle never settled");
}

#[test]
fn default_chain_is_idle_with_focus_on_head() {
    let chain = NodeChain::default();
    assert_eq!(chain.len(), NODES);
    assert_eq!(chain.current(), 0);
    assert_eq!(chain.heading(), Heading::Forward);
    assert_eq!(chain.active_count(), 0);
    for (i, node) in chain.nodes().iter().enumerate() {
        assert_eq!(node.index(), i);
    }
}

#[test]
fn neighbor_reports_boundaries_with_own_index() {
    let chain = NodeChain::new(5);
    let head = chain.node(0).unwrap();
    let tail = chain.node(4).unwrap();
    assert_eq!(head.neighbor(Heading::Backward, 5), Neighbor::Boundary(0));
    assert_eq!(head.neighbor(Heading::Forward, 5), Neighbor::Node(1));
    assert_eq!(tail.neighbor(Heading::Forward, 5), Neighbor::Boundary(4));
    assert_eq!(tail.neighbor(Heading::Backward, 5), Neighbor::Node(3));
}

#[test]
fn four_cycles_reach_the_tail_then_heading_flips() {
    let mut chain = NodeChain::new(5);
    for expected in 0..4 {
        let step = run_cycle(&mut chain);
        assert_eq!(
            step,
            ChainStep::Settled {
                node: expected,
                boundary: false
            }
        );
    }
    assert_eq!(chain.current(), 4);
    assert_eq!(chain.heading(), Heading::Forward);

    let step = run_cycle(&mut chain);
    assert_eq!(step, ChainStep::Settled { node: 4, boundary: true });
    assert_eq!(chain.current(), 4);
    assert_eq!(chain.heading(), Heading::Backward);
    assert_eq!(chain.heading().sign(), -1);
    for node in chain.nodes() {
        assert_eq!(node.state().scale(), 1.0);
    }
}

#[test]
fn sweep_bounces_back_across_the_chain() {
    let mut chain = NodeChain::new(5);
    for _ in 0..5 {
        run_cycle(&mut chain);
    }
    // The tail retracts first, then focus walks back toward the head.
    let mut order = Vec::new();
    for _ in 0..5 {
        if let ChainStep::Settled { node, .. } = run_cycle(&mut chain) {
            order.push(node);
        }
    }
    assert_eq!(order, vec![4, 3, 2, 1, 0]);
    assert_eq!(chain.heading(), Heading::Forward);
    assert_eq!(chain.current(), 0);
    for node in chain.nodes() {
        assert_eq!(node.state().scale(), 0.0);
        assert!(node.state().is_idle());
    }
}

#[test]
fn request_start_is_absorbed_while_current_moves() {
    let mut chain = NodeChain::default();
    assert!(chain.request_start());
    chain.update();
    assert!(!chain.request_start());
    assert_eq!(chain.active_count(), 1);
}

#[test]
fn single_node_chain_bounces_in_place() {
    let mut chain = NodeChain::new(1);
    assert_eq!(run_cycle(&mut chain), ChainStep::Settled { node: 0, boundary: true });
    assert_eq!(chain.heading(), Heading::Backward);
    assert_eq!(run_cycle(&mut chain), ChainStep::Settled { node: 0, boundary: true });
    assert_eq!(chain.heading(), Heading::Forward);
    assert_eq!(chain.node(0).unwrap().state().scale(), 0.0);
}
