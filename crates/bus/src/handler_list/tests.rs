use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::ObserverResult;

#[derive(Default)]
struct Probe {
	log: Vec<&'static str>,
}

fn push(name: &'static str) -> Arc<dyn Observer<Probe>> {
	Arc::new(move |probe: &mut Probe| -> ObserverResult {
		probe.log.push(name);
		Ok(())
	})
}

fn run(list: &HandlerList<Probe>) -> Vec<&'static str> {
	let mut probe = Probe::default();
	for entry in list.snapshot().iter() {
		entry.observer().observe(&mut probe).unwrap();
	}
	probe.log
}

#[test]
fn test_tiers_order_before_registration() {
	let list = HandlerList::new();
	list.register(ObserverOptions::new("o3").priority(Priority::High), push("o3"));
	list.register(ObserverOptions::new("o1").priority(Priority::Normal), push("o1"));
	list.register(ObserverOptions::new("o2").priority(Priority::Normal), push("o2"));

	assert_eq!(run(&list), vec!["o1", "o2", "o3"]);
}

#[test]
fn test_all_tiers_ascending() {
	let list = HandlerList::new();
	for priority in Priority::ALL.iter().rev() {
		let name = priority.as_str();
		list.register(ObserverOptions::new(name).priority(*priority), push(name));
	}

	assert_eq!(run(&list), vec!["lowest", "low", "normal", "high", "highest", "monitor"]);
}

#[test]
fn test_duplicate_registration_invokes_twice() {
	let list = HandlerList::new();
	let observer = push("dup");
	list.register(ObserverOptions::new("dup"), observer.clone());
	list.register(ObserverOptions::new("dup"), observer);

	assert_eq!(list.len(), 2);
	assert_eq!(run(&list), vec!["dup", "dup"]);
}

#[test]
fn test_unregister_removes_every_match() {
	let list = HandlerList::new();
	let observer = push("gone");
	list.register(ObserverOptions::new("gone"), observer.clone());
	list.register(ObserverOptions::new("kept"), push("kept"));
	list.register(ObserverOptions::new("gone").priority(Priority::High), observer.clone());

	assert_eq!(list.unregister(&observer), 2);
	assert_eq!(run(&list), vec!["kept"]);
	assert_eq!(list.unregister(&observer), 0);
}

#[test]
fn test_unregister_absent_is_noop() {
	let list: HandlerList<Probe> = HandlerList::new();
	assert_eq!(list.unregister(&push("never")), 0);
	assert!(!list.unregister_id(ObserverId(42)));
	assert!(list.is_empty());
}

#[test]
fn test_unregister_id_removes_only_that_entry() {
	let list = HandlerList::new();
	let observer = push("same");
	let first = list.register(ObserverOptions::new("same"), observer.clone());
	list.register(ObserverOptions::new("same"), observer);

	assert!(list.unregister_id(first));
	assert_eq!(list.len(), 1);
	assert!(!list.unregister_id(first));
}

#[test]
fn test_unregister_owner() {
	let list = HandlerList::new();
	list.register(ObserverOptions::new("a").owner("plugin_a"), push("a"));
	list.register(ObserverOptions::new("b").owner("plugin_b").priority(Priority::Low), push("b"));
	list.register(ObserverOptions::new("a2").owner("plugin_a").priority(Priority::Monitor), push("a2"));

	assert_eq!(list.unregister_owner("plugin_a"), 2);
	assert_eq!(run(&list), vec!["b"]);
}

#[test]
fn test_snapshot_unaffected_by_later_registration() {
	let list = HandlerList::new();
	list.register(ObserverOptions::new("first"), push("first"));
	let snap = list.snapshot();
	list.register(ObserverOptions::new("second"), push("second"));

	assert_eq!(snap.len(), 1);
	assert_eq!(list.len(), 2);
}

#[test]
fn test_clear() {
	let list = HandlerList::new();
	list.register(ObserverOptions::new("a"), push("a"));
	list.register(ObserverOptions::new("b"), push("b"));

	assert_eq!(list.clear(), 2);
	assert!(list.is_empty());
}

#[test]
fn test_concurrent_registration_keeps_every_entry() {
	let list = Arc::new(HandlerList::<Probe>::new());
	let threads: Vec<_> = (0..4)
		.map(|_| {
			let list = list.clone();
			std::thread::spawn(move || {
				for _ in 0..25 {
					list.register(ObserverOptions::new("t"), push("t"));
				}
			})
		})
		.collect();
	for thread in threads {
		thread.join().unwrap();
	}

	assert_eq!(list.len(), 100);
	let ids: Vec<_> = list.snapshot().iter().map(|entry| entry.id()).collect();
	let mut sorted = ids.clone();
	sorted.sort();
	assert_eq!(ids, sorted);
}
