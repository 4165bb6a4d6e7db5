use open_sequences::data_structure::array_list::{grown_capacity, ArrayList};
use open_sequences::data_structure::dl_list::DLList;
use open_sequences::data_structure::sl_list::SLList;
use open_sequences::interface::list::List;
use open_sequences::interface::list_iterator::ListIterator;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    AddAt(usize, String),
    Set(usize, String),
    Remove(usize),
}

fn op() -> impl Strategy<Value = Op> {
    let value = "[a-z]{1,3}";
    prop_oneof![
        value.prop_map(Op::Add),
        (any::<usize>(), value).prop_map(|(i, x)| Op::AddAt(i, x)),
        (any::<usize>(), value).prop_map(|(i, x)| Op::Set(i, x)),
        any::<usize>().prop_map(Op::Remove),
    ]
}

macro_rules! property_tests {
    ($name:ident, $list:ident) => {
        mod $name {
            use super::*;

            /// Vecを模範として同じ操作を適用し、内容を比べる
            fn apply(ops: &[Op]) -> ($list<String>, Vec<String>) {
                let mut list = $list::new();
                let mut model: Vec<String> = vec![];
                for op in ops {
                    match op.clone() {
                        Op::Add(x) => {
                            list.add(x.clone());
                            model.push(x);
                        }
                        Op::AddAt(i, x) => {
                            let i = i % (model.len() + 1);
                            list.add_at(i, x.clone()).unwrap();
                            model.insert(i, x);
                        }
                        Op::Set(i, x) => {
                            if model.is_empty() {
                                assert!(list.set(i, x).is_err());
                                continue;
                            }
                            let i = i % model.len();
                            let old = list.set(i, x.clone()).unwrap();
                            assert_eq!(old, std::mem::replace(&mut model[i], x));
                        }
                        Op::Remove(i) => {
                            if model.is_empty() {
                                assert!(list.remove(i).is_err());
                                continue;
                            }
                            let i = i % model.len();
                            assert_eq!(list.remove(i).unwrap(), model.remove(i));
                        }
                    }
                }
                (list, model)
            }

            proptest! {
                #[test]
                fn matches_vec(ops in prop::collection::vec(op(), 0..64)) {
                    let (list, model) = apply(&ops);
                    prop_assert_eq!(List::size(&list), model.len());

                    let forward: Vec<String> = List::iter(&list).map(|x| x.to_string()).collect();
                    prop_assert_eq!(&forward, &model);

                    let mut it = list.list_iterator();
                    let mut cursor = vec![];
                    while it.has_next() {
                        cursor.push(it.next().unwrap().to_string());
                    }
                    prop_assert_eq!(&cursor, &model);

                    let mut it = list.list_iterator_at(List::size(&list)).unwrap();
                    let mut backward = vec![];
                    while it.has_previous() {
                        backward.push(it.previous().unwrap().to_string());
                    }
                    backward.reverse();
                    prop_assert_eq!(&backward, &model);
                }

                #[test]
                fn get_after_set(values in prop::collection::vec("[a-z]{1,3}", 1..32), i in any::<usize>(), v in "[A-Z]{1,3}") {
                    let mut list: $list<String> = values.into_iter().collect();
                    let i = i % List::size(&list);
                    list.set(i, v.clone()).unwrap();
                    prop_assert_eq!(list.get(i).unwrap().to_string(), v);
                }
            }
        }
    };
}

property_tests!(array_list, ArrayList);
property_tests!(sl_list, SLList);
property_tests!(dl_list, DLList);

proptest! {
    #[test]
    fn growth_keeps_order(capacity in 0usize..40) {
        let mut list = ArrayList::with_capacity(capacity);
        for i in 0..=capacity {
            list.add(i);
        }
        prop_assert!(list.capacity() >= grown_capacity(capacity));
        prop_assert!(list.capacity() >= capacity * 3 / 2);
        let values: Vec<usize> = list.iter().copied().collect();
        prop_assert_eq!(values, (0..=capacity).collect::<Vec<_>>());
    }

    #[test]
    fn remove_item_removes_first_match(values in prop::collection::vec(0u8..4, 0..32), x in 0u8..4) {
        let mut list: ArrayList<u8> = values.iter().copied().collect();
        let mut model = values.clone();
        let removed = list.remove_item(&x);
        match model.iter().position(|y| *y == x) {
            Some(i) => {
                prop_assert!(removed);
                model.remove(i);
            }
            None => prop_assert!(!removed),
        }
        let rest: Vec<u8> = list.iter().copied().collect();
        prop_assert_eq!(rest, model);
    }
}
