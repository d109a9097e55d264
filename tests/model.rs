//! Random operation sequences checked against a dense `Vec` model.

use proptest::prelude::*;
use sparse_list::SparseList;

#[derive(Debug, Clone)]
enum Op {
    Set(i32, i32),
    Add(i32),
    Insert(i32, i32),
    Remove(i32),
    RemoveAt(i32),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-2_i32..24, -2_i32..3).prop_map(|(i, v)| Op::Set(i, v)),
        (-2_i32..3).prop_map(Op::Add),
        (-1_i32..24, -2_i32..3).prop_map(|(i, v)| Op::Insert(i, v)),
        (-2_i32..3).prop_map(Op::Remove),
        (-2_i32..28).prop_map(Op::RemoveAt),
        Just(Op::Clear),
    ]
}

fn shrink(model: &mut Vec<i32>) {
    while model.last() == Some(&0) {
        model.pop();
    }
}

fn apply(model: &mut Vec<i32>, op: &Op) {
    match *op {
        Op::Set(i, v) if i >= 0 => {
            let i = i as usize;
            if i >= model.len() {
                model.resize(i + 1, 0);
            }
            model[i] = v;
        }
        Op::Set(..) => {}
        Op::Add(v) => model.push(v),
        Op::Insert(i, v) if i >= 0 => {
            let i = i as usize;
            if i <= model.len() {
                model.insert(i, v);
            } else {
                model.resize(i + 1, 0);
                model[i] = v;
            }
        }
        Op::Insert(..) => {}
        Op::Remove(v) => {
            if let Some(i) = model.iter().position(|&x| x == v) {
                model[i] = 0;
                shrink(model);
            }
        }
        Op::RemoveAt(i) => {
            if i >= 0 && (i as usize) < model.len() {
                model[i as usize] = 0;
            }
            shrink(model);
        }
        Op::Clear => model.clear(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn operation_sequences_match_dense_model(ops in proptest::collection::vec(op(), 1..60)) {
        let list = SparseList::<i32>::new();
        let mut model = Vec::new();

        for op in &ops {
            match *op {
                Op::Set(i, v) => {
                    prop_assert_eq!(list.set(i, v).is_ok(), i >= 0);
                }
                Op::Add(v) => list.add(v),
                Op::Insert(i, v) => {
                    prop_assert_eq!(list.insert(i, v).is_ok(), i >= 0);
                }
                Op::Remove(v) => {
                    let expected = model.contains(&v);
                    prop_assert_eq!(list.remove(&v), expected);
                }
                Op::RemoveAt(i) => list.remove_at(i),
                Op::Clear => list.clear(),
            }
            apply(&mut model, op);

            prop_assert_eq!(list.count(), model.len());
            prop_assert_eq!(list.to_vec(), model.clone());
        }
    }

    #[test]
    fn index_of_agrees_with_position(values in proptest::collection::vec(-2_i32..3, 0..30), needle in -2_i32..3) {
        let list: SparseList<i32> = values.clone().into();
        prop_assert_eq!(list.index_of(&needle), values.iter().position(|&x| x == needle));
    }
}
