/// Sorts `v` with a binary max-heap built over the slice itself, no side buffer.
///
/// Runs in O(n * log(n)) for every input, which is what makes it the depth-budget fallback.
pub(crate) fn heapsort(v: &mut [i32]) {
    let len = v.len();

    // Build the heap bottom-up. Leaves are valid heaps already, start at the last parent.
    for node in (0..len / 2).rev() {
        sift_down(v, node);
    }

    // Swap the max into the growing sorted suffix and restore the shrunk heap.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0);
    }
}

fn sift_down(v: &mut [i32], mut node: usize) {
    loop {
        let left = 2 * node + 1;
        let right = 2 * node + 2;

        let mut greatest = node;
        if left < v.len() && v[left] > v[greatest] {
            greatest = left;
        }
        if right < v.len() && v[right] > v[greatest] {
            greatest = right;
        }

        if greatest == node {
            return;
        }

        v.swap(node, greatest);
        node = greatest;
    }
}
