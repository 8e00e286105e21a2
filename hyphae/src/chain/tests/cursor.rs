use super::*;

#[test]
fn move_peek() {
    let _trace = trace_init();
    let chain = chain_from([1, 2, 3]);

    let mut cursor = chain.cursor();
    assert!(cursor.has_next());
    assert_eq!(cursor.current(), Err(Error::NoSuchElement));
    assert_eq!(cursor.peek_next(), Ok(&1));
    assert_eq!(cursor.index(), 0);

    cursor.move_next().unwrap();
    assert_eq!(cursor.current(), Ok(&1));
    assert_eq!(cursor.peek_next(), Ok(&2));
    assert_eq!(cursor.index(), 1);

    cursor.move_next().unwrap();
    cursor.move_next().unwrap();
    assert_eq!(cursor.current(), Ok(&3));
    assert!(!cursor.has_next());
    assert_eq!(cursor.peek_next(), Err(Error::NoSuchElement));
    assert_eq!(cursor.index(), 3);

    // moving past the end fails and leaves the cursor where it was
    assert_eq!(cursor.move_next(), Err(Error::NoSuchElement));
    assert_eq!(cursor.current(), Ok(&3));
    assert_eq!(cursor.index(), 3);
}

#[test]
fn cursor_on_empty_chain() {
    let chain = Chain::<i32>::new();
    let mut cursor = chain.cursor();
    assert!(!cursor.has_next());
    assert_eq!(cursor.current(), Err(Error::NoSuchElement));
    assert_eq!(cursor.peek_next(), Err(Error::NoSuchElement));
    assert_eq!(cursor.move_next(), Err(Error::NoSuchElement));
    assert_eq!(cursor, chain.end());
}

#[test]
fn end_equality() {
    let chain = chain_from([1, 2, 3]);
    let end = chain.end();
    assert!(!end.has_next());
    assert_eq!(end.current(), Ok(&3));
    assert_eq!(end.index(), 3);

    let mut cursor = chain.cursor();
    let mut visited = Vec::new();
    while cursor != end {
        cursor.move_next().unwrap();
        visited.push(*cursor.current().unwrap());
    }
    assert_eq!(visited, [1, 2, 3]);
    assert_eq!(cursor, chain.end());

    // cursors at the same gap are equal; different gaps are not
    let mut a = chain.cursor();
    let b = chain.cursor();
    assert_eq!(a, b);
    a.move_next().unwrap();
    assert_ne!(a, b);

    // cursors over different chains are never equal
    let other = chain.clone();
    assert_ne!(chain.cursor(), other.cursor());
    assert_ne!(chain.end(), other.end());
}

#[test]
fn cursor_iterator() {
    let chain = chain_from([1, 2, 3]);
    let mut cursor = chain.cursor();
    assert_eq!(cursor.size_hint(), (3, Some(3)));
    assert_eq!(cursor.next(), Some(&1));
    assert_eq!(cursor.size_hint(), (2, Some(2)));

    // the rest of the iteration resumes from the cursor's gap
    assert_eq!(cursor.copied().collect::<Vec<_>>(), [2, 3]);
    assert_eq!(cursor.peek_next(), Ok(&2));
}

#[test]
fn insert_next_at_front() {
    let _trace = trace_init();
    let mut chain = chain_from([2, 3]);

    let mut cursor = chain.cursor_mut();
    cursor.insert_next(1);
    assert_eq!(cursor.peek_next(), Ok(&1));
    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.len(), 3);
    cursor.insert_next(0);

    chain.assert_valid();
    assert_eq!(collect_vals(&chain), [0, 1, 2, 3]);
    assert_eq!(chain.front(), Ok(&0));
}

#[test]
fn insert_next_at_end() {
    let _trace = trace_init();
    let mut chain = chain_from([1, 2]);

    let mut cursor = chain.cursor_mut();
    cursor.move_next().unwrap();
    cursor.move_next().unwrap();
    assert!(!cursor.has_next());
    cursor.insert_next(3);
    assert_eq!(cursor.peek_next(), Ok(&3));
    assert_eq!(cursor.current(), Ok(&2));

    chain.assert_valid();
    assert_eq!(chain.back(), Ok(&3));

    // appends after a cursor insert at the end go after the new element
    chain.push_back(4);
    chain.assert_valid();
    assert_eq!(collect_vals(&chain), [1, 2, 3, 4]);
}

#[test]
fn insert_next_into_empty() {
    let mut chain = Chain::new();

    let mut cursor = chain.cursor_mut();
    assert!(cursor.is_empty());
    cursor.insert_next(1);
    assert_eq!(cursor.peek_next(), Ok(&1));

    chain.assert_valid();
    assert_eq!(chain.len(), 1);
    assert_eq!(chain.front(), Ok(&1));
    assert_eq!(chain.back(), Ok(&1));
}

#[test]
fn insert_next_in_middle() {
    let mut chain = chain_from([1, 2, 4, 5]);

    let mut cursor = chain.cursor_mut();
    cursor.move_next().unwrap();
    cursor.move_next().unwrap();
    cursor.insert_next(3);
    // the cursor does not move
    assert_eq!(cursor.current(), Ok(&2));
    assert_eq!(cursor.peek_next(), Ok(&3));
    assert_eq!(cursor.index(), 2);

    chain.assert_valid();
    assert_eq!(collect_vals(&chain), [1, 2, 3, 4, 5]);
}

#[test]
fn remove_next() {
    let _trace = trace_init();
    let mut chain = chain_from([1, 2, 3, 4]);

    let mut cursor = chain.cursor_mut();
    // head
    assert_eq!(cursor.remove_next(), Ok(1));
    assert_eq!(cursor.peek_next(), Ok(&2));
    assert_eq!(cursor.len(), 3);

    // middle
    cursor.move_next().unwrap();
    assert_eq!(cursor.remove_next(), Ok(3));
    assert_eq!(cursor.current(), Ok(&2));
    assert_eq!(cursor.peek_next(), Ok(&4));

    // tail
    assert_eq!(cursor.remove_next(), Ok(4));
    assert!(!cursor.has_next());
    assert_eq!(cursor.remove_next(), Err(Error::NoSuchElement));

    chain.assert_valid();
    assert_eq!(collect_vals(&chain), [2]);
    assert_eq!(chain.back(), Ok(&2));
}

#[test]
fn remove_only_element() {
    let mut chain = chain_from([1]);
    assert_eq!(chain.cursor_mut().remove_next(), Ok(1));
    chain.assert_valid();
    assert!(chain.is_empty());
    assert_eq!(chain.back(), Err(Error::EmptyCollection));

    chain.push_back(2);
    chain.assert_valid();
    assert_eq!(collect_vals(&chain), [2]);
}

#[test]
fn mutate_through_cursor() {
    let mut chain = chain_from([1, 2, 3]);

    let mut cursor = chain.cursor_mut();
    assert_eq!(cursor.current_mut(), Err(Error::NoSuchElement));
    *cursor.peek_next_mut().unwrap() = 10;
    cursor.move_next().unwrap();
    *cursor.current_mut().unwrap() += 1;
    cursor.move_next().unwrap();
    cursor.move_next().unwrap();
    assert_eq!(cursor.peek_next_mut(), Err(Error::NoSuchElement));

    assert_eq!(collect_vals(&chain), [11, 2, 3]);
}

#[test]
fn skip_while() {
    let mut chain = chain_from([1, 3, 5, 6, 7]);

    let mut cursor = chain.cursor_mut();
    assert_eq!(cursor.skip_while(|&val| val % 2 == 1), 3);
    assert_eq!(cursor.peek_next(), Ok(&6));
    assert_eq!(cursor.index(), 3);

    // no match ahead: nothing moves
    assert_eq!(cursor.skip_while(|&val| val > 100), 0);
    assert_eq!(cursor.index(), 3);

    // everything matches: stops at the end
    assert_eq!(cursor.skip_while(|_| true), 2);
    assert!(!cursor.has_next());
    assert_eq!(cursor.current(), Ok(&7));
}

#[test]
fn as_cursor() {
    let mut chain = chain_from([1, 2, 3]);

    let mut cursor = chain.cursor_mut();
    cursor.move_next().unwrap();
    {
        let read = cursor.as_cursor();
        assert_eq!(read.current(), Ok(&1));
        assert_eq!(read.peek_next(), Ok(&2));
        assert_eq!(read.index(), 1);
        assert_eq!(read.copied().collect::<Vec<_>>(), [2, 3]);
    }

    cursor.skip_while(|_| true);
    let read = cursor.as_cursor();
    assert!(!read.has_next());
    assert_eq!(read.index(), 3);
}

/// Walks a chain of pairs with one cursor, removing every element whose
/// neighbor ahead shares its key.
#[test]
fn dedup_with_cursor() {
    let mut chain: Chain<(u8, char)> = [
        (1, 'a'),
        (1, 'b'),
        (2, 'c'),
        (3, 'd'),
        (3, 'e'),
        (3, 'f'),
    ]
    .into_iter()
    .collect();

    let mut cursor = chain.cursor_mut();
    cursor.move_next().unwrap();
    loop {
        let Ok(&(key, _)) = cursor.current() else {
            break;
        };
        match cursor.peek_next() {
            Ok(&(next, _)) if next == key => {
                cursor.remove_next().unwrap();
            }
            Ok(_) => cursor.move_next().unwrap(),
            Err(_) => break,
        }
    }

    chain.assert_valid();
    assert_eq!(
        chain.iter().copied().collect::<Vec<_>>(),
        [(1, 'a'), (2, 'c'), (3, 'd')]
    );
}
