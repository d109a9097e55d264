use sparse_list::SparseList;

fn main() -> sparse_list::Result<()> {
    let list = SparseList::<i32>::new();
    list.push(10);
    list.push(20);
    list.push(30);
    list.set(6, 70)?;
    list.insert(1, 15)?;
    println!("{:?}", list);
    println!("{:#?}", list);

    list.remove(&20);
    list.remove_at(7);
    println!("{:?} len={} nnz={}", list, list.len(), list.nnz());

    let mut buf = vec![0; list.len()];
    list.copy_to(Some(&mut buf[..]), 0)?;
    println!("{:?}", buf);
    Ok(())
}
