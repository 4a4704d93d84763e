#[cfg(test)]
pub const POST_DATA: &str = "title: A hard look at garbage collection
date: 2024-03-05T09:30:00Z
tags: programming, memory
---
Garbage collection gets blamed for a lot of latency it did not cause.

Most of the pauses people complain about come from somewhere else
entirely[^1], usually the allocator fighting the operating system.

The collector itself is rarely the bottleneck.

[^1]: Measured on a mid-sized service over a month of traces.
";

#[cfg(test)]
pub const POST_DATA_DRAFT: &str = "title: Unfinished thoughts
date: 2024-04-01T08:00:00Z
draft: true
---
Do not publish this yet.
";
