// Shared snippet fixtures for integration tests
#![allow(dead_code)]

use indoc::indoc;

pub const BINARY_SEARCH_JS: &str = indoc! {r#"
    function binarySearch(arr, target) {
      let left = 0;
      let right = arr.length - 1;

      while (left <= right) {
        const mid = Math.floor((left + right) / 2);

        if (arr[mid] === target) {
          return mid;
        } else if (arr[mid] < target) {
          left = mid + 1;
        } else {
          right = mid - 1;
        }
      }

      return -1;
    }
"#};

pub const USE_API_HOOK_TS: &str = indoc! {r#"
    import { useState, useEffect } from 'react';

    export function useApi(url) {
      const [data, setData] = useState(null);
      const [loading, setLoading] = useState(true);

      useEffect(() => {
        fetch(url)
          .then(res => res.json())
          .then(data => {
            setData(data);
            setLoading(false);
          });
      }, [url]);

      return { data, loading };
    }
"#};

pub const QUICKSORT_PY: &str = indoc! {r#"
    def quicksort(arr):
        if len(arr) <= 1:
            return arr

        pivot = arr[len(arr) // 2]
        left = [x for x in arr if x < pivot]
        middle = [x for x in arr if x == pivot]
        right = [x for x in arr if x > pivot]

        return quicksort(left) + middle + quicksort(right)
"#};

pub const DEBOUNCE_JS: &str = indoc! {r#"
    function debounce(func, delay) {
      let timeoutId;

      return function(...args) {
        clearTimeout(timeoutId);
        timeoutId = setTimeout(() => {
          func.apply(this, args);
        }, delay);
      };
    }

    // Usage example
    const handleSearch = debounce((query) => {
      console.log('Searching for:', query);
    }, 300);
"#};

pub const MEMO_FIBONACCI_JS: &str = indoc! {r#"
    function fibonacci(n, memo = {}) {
      if (n in memo) return memo[n];
      if (n <= 2) return 1;

      memo[n] = fibonacci(n - 1, memo) + fibonacci(n - 2, memo);
      return memo[n];
    }
"#};

pub const BUBBLE_SORT_C: &str = indoc! {r#"
    void bubble(int *a, int n) {
        for (int i = 0; i < n; i++) {
            for (int j = 0; j + 1 < n - i; j++) {
                if (a[j] > a[j + 1]) { int t = a[j]; a[j] = a[j + 1]; a[j + 1] = t; }
            }
        }
    }
"#};
